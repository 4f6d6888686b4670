// Unit tests harness
mod data {
    include!("data.rs");
}
mod dispatch {
    include!("dispatch.rs");
}
mod list {
    include!("list.rs");
}
mod module {
    include!("module.rs");
}
mod plugin {
    include!("plugin.rs");
}
mod primitives {
    include!("primitives.rs");
}
mod reduce {
    include!("reduce.rs");
}
mod symbol {
    include!("symbol.rs");
}
mod value {
    include!("value.rs");
}
