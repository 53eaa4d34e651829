//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::store::store::Filestore;
use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::Path;

/// File store in a local directory
#[derive(Clone, Debug)]
pub struct Filedir {
    pub basepath: String,
}

impl Filestore for Filedir {
    fn info(&self) -> String {
        format!("Sheet directory: {}", self.basepath)
    }
    fn read<F>(&self, path: &str, mut read: F) -> bool
    where
        F: FnMut(&mut dyn Read),
    {
        let fullpath = format!("{}/{}", self.basepath, path);
        debug!("Filedir.read {}", fullpath);
        match File::open(&fullpath) {
            Ok(mut f) => {
                read(&mut f);
                true
            }
            Err(_e) => false,
        }
    }
    fn write(&self, path: &str, obj: &[u8]) -> Result<(), io::Error> {
        let fullpath = format!("{}/{}", self.basepath, path);
        debug!("Filedir.write {}", fullpath);
        let p = Path::new(&fullpath);
        if let Some(dir) = p.parent() {
            fs::create_dir_all(dir)?;
        }
        let mut f = File::create(&fullpath)?;
        f.write_all(obj)
    }

    fn exists(&self, path: &str) -> bool {
        let fullpath = format!("{}/{}", self.basepath, path);
        Path::new(&fullpath).exists()
    }
}
