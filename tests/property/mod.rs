mod codec {
    include!("codec.rs");
}
mod replace {
    include!("replace.rs");
}
