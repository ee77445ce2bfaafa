mod env;
pub use env::EnvKeyProvider;

mod r#static;
pub use r#static::StaticKeyProvider;
