//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::store::filedir::Filedir;
use crate::store::store::Filestore;
use std::io::{self, Read};

/// Writes into several file stores
#[derive(Clone, Debug)]
pub struct Multistore {
    pub stores: Vec<Filedir>,
}

impl Filestore for Multistore {
    fn info(&self) -> String {
        let infos: Vec<String> = self.stores.iter().map(|s| s.info()).collect();
        infos.join(", ")
    }
    /// Read from the first store containing `path`
    fn read<F>(&self, path: &str, mut read: F) -> bool
    where
        F: FnMut(&mut dyn Read),
    {
        self.stores.iter().any(|s| s.read(path, &mut read))
    }
    fn write(&self, path: &str, obj: &[u8]) -> Result<(), io::Error> {
        for store in &self.stores {
            store.write(path, obj)?;
        }
        Ok(())
    }
    /// True if every store contains `path`
    fn exists(&self, path: &str) -> bool {
        !self.stores.is_empty() && self.stores.iter().all(|s| s.exists(path))
    }
}
