//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::config::FilestoreCfg;
use crate::core::Config;
use crate::store::{Filedir, Filestore, Sheetstore};
use std::fs;
use std::path::Path;

fn testdir(name: &str) -> String {
    use std::env;

    let mut dir = env::temp_dir();
    dir.push(name);
    let basepath = format!("{}", &dir.display());
    let _ = fs::remove_dir_all(&basepath);
    basepath
}

#[test]
fn test_filedir() {
    let store = Filedir {
        basepath: testdir("atlante_filedir_test"),
    };
    let path = "sheet/grid.geojson";
    let fullpath = format!("{}/{}", store.basepath, path);
    let obj = "0123456789";

    // Missing
    assert_eq!(store.read(path, |_| {}), false);
    assert!(!store.exists(path));

    // Write into store
    let _ = store.write(path, obj.as_bytes());
    assert!(Path::new(&fullpath).exists());
    assert!(store.exists(path));

    // Read from store
    let mut s = String::new();
    store.read(path, |f| {
        let _ = f.read_to_string(&mut s);
    });
    assert_eq!(&s, "0123456789");
}

#[test]
fn test_multistore() {
    let dirs = vec![
        Filedir {
            basepath: testdir("atlante_multistore_a"),
        },
        Filedir {
            basepath: testdir("atlante_multistore_b"),
        },
    ];
    let store = Sheetstore::combine(dirs.clone());
    match store {
        Sheetstore::Multistore(_) => {}
        _ => panic!("Multistore expected"),
    }
    let path = "sheet/index.json";
    assert!(!store.exists(path));
    store.write(path, b"{}").unwrap();
    assert!(store.exists(path));
    for dir in &dirs {
        assert!(dir.exists(path));
    }
    let mut s = String::new();
    assert!(store.read(path, |f| {
        let _ = f.read_to_string(&mut s);
    }));
    assert_eq!(&s, "{}");
    assert!(store.info().contains("atlante_multistore_b"));
}

#[test]
fn test_combine() {
    match Sheetstore::combine(Vec::new()) {
        Sheetstore::Nostore(_) => {}
        _ => panic!("Nostore expected"),
    }
    let store = Sheetstore::combine(vec![Filedir {
        basepath: "/tmp".to_string(),
    }]);
    assert_eq!(store.info(), "Sheet directory: /tmp");

    let store = Sheetstore::combine(Vec::new());
    assert!(store.write("any", b"data").is_ok());
    assert!(!store.exists("any"));
}

#[test]
fn test_filedir_config() {
    let cfg = FilestoreCfg {
        name: "local".to_string(),
        store_type: "file".to_string(),
        base: Some("/tmp/atlante".to_string()),
    };
    assert_eq!(Filedir::from_config(&cfg).unwrap().basepath, "/tmp/atlante");

    let cfg = FilestoreCfg {
        name: "bucket".to_string(),
        store_type: "s3".to_string(),
        base: None,
    };
    assert_eq!(
        Filedir::from_config(&cfg).err(),
        Some("Unknown filestore type 's3' of filestore 'bucket'".to_string())
    );

    let cfg = FilestoreCfg {
        name: "local".to_string(),
        store_type: "file".to_string(),
        base: None,
    };
    assert!(Filedir::from_config(&cfg).is_err());
}
