//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

pub mod filedir;
pub mod multistore;
pub mod store;

#[cfg(test)]
mod store_test;

pub use self::filedir::Filedir;
pub use self::multistore::Multistore;
pub use self::store::Filestore;
pub use self::store::Nostore;
use crate::core::config::FilestoreCfg;
use crate::core::Config;
use std::io;
use std::io::Read;

#[derive(Clone, Debug)]
pub enum Sheetstore {
    Nostore(Nostore),
    Filedir(Filedir),
    Multistore(Multistore),
}

impl Sheetstore {
    /// Store writing into all given directories
    pub fn combine(mut stores: Vec<Filedir>) -> Sheetstore {
        match stores.len() {
            0 => Sheetstore::Nostore(Nostore),
            1 => Sheetstore::Filedir(stores.remove(0)),
            _ => Sheetstore::Multistore(Multistore { stores }),
        }
    }
}

impl Filestore for Sheetstore {
    fn info(&self) -> String {
        match self {
            &Sheetstore::Nostore(ref store) => store.info(),
            &Sheetstore::Filedir(ref store) => store.info(),
            &Sheetstore::Multistore(ref store) => store.info(),
        }
    }
    fn read<F>(&self, path: &str, read: F) -> bool
    where
        F: FnMut(&mut dyn Read),
    {
        match self {
            &Sheetstore::Nostore(ref store) => store.read(path, read),
            &Sheetstore::Filedir(ref store) => store.read(path, read),
            &Sheetstore::Multistore(ref store) => store.read(path, read),
        }
    }
    fn write(&self, path: &str, obj: &[u8]) -> Result<(), io::Error> {
        match self {
            &Sheetstore::Nostore(ref store) => store.write(path, obj),
            &Sheetstore::Filedir(ref store) => store.write(path, obj),
            &Sheetstore::Multistore(ref store) => store.write(path, obj),
        }
    }
    fn exists(&self, path: &str) -> bool {
        match self {
            &Sheetstore::Nostore(ref store) => store.exists(path),
            &Sheetstore::Filedir(ref store) => store.exists(path),
            &Sheetstore::Multistore(ref store) => store.exists(path),
        }
    }
}

impl<'a> Config<'a, FilestoreCfg> for Filedir {
    fn from_config(config: &FilestoreCfg) -> Result<Self, String> {
        match &config.store_type.to_lowercase() as &str {
            "file" => config
                .base
                .as_ref()
                .map(|base| Filedir {
                    basepath: base.clone(),
                })
                .ok_or(format!(
                    "Missing configuration entry 'base' in filestore '{}'",
                    config.name
                )),
            other => Err(format!(
                "Unknown filestore type '{}' of filestore '{}'",
                other, config.name
            )),
        }
    }
    fn gen_config() -> String {
        let toml = r#"
#[[filestore]]
#name = "local"
#type = "file"
#base = "/tmp/atlante"
"#;
        toml.to_string()
    }
}
