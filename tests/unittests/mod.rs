// Unit tests harness
mod env {
    include!("env.rs");
}
mod codec {
    include!("codec.rs");
}
mod symbol {
    include!("symbol.rs");
}
