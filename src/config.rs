use std::path::PathBuf;

macro_rules! make_key {
    (@one $key:ident) => {
        const $key: &str = stringify!($key);
    };
    ($($key:ident)*) => {
        $(make_key!(@one $key);)*
    }
}

make_key! {
    TALLY_STORE_PATH
}

#[derive(Debug)]
pub struct Config {
    pub store_path: PathBuf,
}

impl Config {
    pub fn load_from_env() -> anyhow::Result<Self> {
        Ok(Self {
            store_path: get_var_or(TALLY_STORE_PATH, || "tally.json")?.into(),
        })
    }
}

fn get_var(key: &str) -> anyhow::Result<String> {
    anyhow::Context::with_context(std::env::var(key), || {
        anyhow::anyhow!("env var `{key}` must be set")
    })
}

fn get_var_or<T: ToString>(key: &str, def: fn() -> T) -> anyhow::Result<String> {
    get_var(key).or_else(|_e| Ok(def().to_string()))
}
