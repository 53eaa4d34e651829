//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::metadata::sheet_index;
use atlante_core::core::feature::FeatureCollection;
use atlante_core::core::{ApplicationCfg, Config};
use atlante_core::service::Sheet;
use atlante_core::store::{Filedir, Filestore, Sheetstore};
use pbr::ProgressBar;
use std::cmp;
use std::collections::BTreeMap;
use std::io::Stdout;
use tokio::task;

/// Grid reference sheets with their file stores
#[derive(Clone)]
pub struct SheetService {
    pub sheets: Vec<Sheet>,
    /// File stores by lower-case name
    pub filestores: BTreeMap<String, Filedir>,
}

/// Sheet outputs with their path relative to the store
struct SheetFile {
    path: String,
    content: Vec<u8>,
}

impl SheetService {
    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        let name = name.to_lowercase();
        self.sheets.iter().find(|s| s.name == name)
    }
    /// Grid overlay of a sheet
    pub fn overlay(&self, name: &str) -> Result<FeatureCollection, String> {
        self.sheet(name)
            .map(|sheet| sheet.overlay())
            .ok_or(format!("Sheet '{}' not found", name))
    }
    /// Store receiving the generated files of a sheet
    pub fn store(&self, sheet: &Sheet) -> Sheetstore {
        let stores = sheet
            .filestores
            .iter()
            .filter_map(|name| self.filestores.get(&name.to_lowercase()).cloned())
            .collect();
        Sheetstore::combine(stores)
    }
    fn progress_bar(&self, sheets: usize) -> ProgressBar<Stdout> {
        let mut pb = ProgressBar::new(sheets as u64);
        pb.message("Sheet ");
        pb.show_speed = false;
        pb.show_percent = false;
        pb.show_time_left = false;
        pb
    }
    /// Write overlay and label index of the selected sheets into their stores
    pub fn generate(
        &self,
        sheet_name: Option<&str>,
        progress: bool,
        overwrite: bool,
    ) -> Result<usize, String> {
        let sheets: Vec<&Sheet> = match sheet_name {
            Some(name) => vec![self
                .sheet(name)
                .ok_or(format!("Sheet '{}' not found", name))?],
            None => self.sheets.iter().collect(),
        };
        let rt = tokio::runtime::Runtime::new()
            .map_err(|e| format!("Couldn't initialize tokio runtime: {}", e))?;
        rt.block_on(self.generate_sheets(&sheets, progress, overwrite));
        if progress {
            println!("");
        }
        Ok(sheets.len())
    }
    async fn generate_sheets(&self, sheets: &[&Sheet], progress: bool, overwrite: bool) {
        let task_queue_size = cmp::max(num_cpus::get() * 2, 2);
        let mut tasks = Vec::with_capacity(task_queue_size);
        let mut pb = self.progress_bar(sheets.len());
        for sheet in sheets {
            let store = self.store(sheet);
            info!("Generating sheet '{}' into {}", sheet.name, store.info());
            let grid_path = format!("{}/grid.geojson", sheet.name);
            let index_path = format!("{}/index.json", sheet.name);
            let write_grid = overwrite || !store.exists(&grid_path);
            let write_index = overwrite || !store.exists(&index_path);
            if !write_grid && !write_index {
                debug!("Skipping existing sheet '{}'", sheet.name);
            } else {
                let sheet = (*sheet).clone();
                tasks.push(task::spawn(async move {
                    let files = task::spawn_blocking(move || {
                        let mut files = Vec::new();
                        if write_grid {
                            match sheet.overlay().to_geojson_vec() {
                                Ok(content) => files.push(SheetFile {
                                    path: grid_path,
                                    content,
                                }),
                                Err(e) => error!("Error encoding {}: {}", grid_path, e),
                            }
                        }
                        if write_index {
                            match serde_json::to_vec(&sheet_index(&sheet)) {
                                Ok(content) => files.push(SheetFile {
                                    path: index_path,
                                    content,
                                }),
                                Err(e) => error!("Error encoding {}: {}", index_path, e),
                            }
                        }
                        files
                    })
                    .await;
                    match files {
                        Ok(files) => {
                            for file in files {
                                if let Err(ioerr) = store.write(&file.path, &file.content) {
                                    error!("Error writing {}: {}", file.path, ioerr);
                                }
                            }
                        }
                        Err(e) => error!("Sheet generation failed: {}", e),
                    }
                }));
                if tasks.len() >= task_queue_size {
                    tasks = await_one_task(tasks).await;
                }
            }
            if progress {
                pb.inc();
            }
        }
        // Finish remaining tasks
        futures_util::future::join_all(tasks).await;
    }
}

async fn await_one_task<T>(tasks: Vec<task::JoinHandle<T>>) -> Vec<task::JoinHandle<T>> {
    match futures_util::future::select_all(tasks).await {
        // Ignoring all errors
        (_result, _index, remaining) => remaining,
    }
}

impl<'a> Config<'a, ApplicationCfg> for SheetService {
    fn from_config(config: &ApplicationCfg) -> Result<Self, String> {
        let mut filestores = BTreeMap::new();
        for store_cfg in &config.filestores {
            let name = store_cfg.name.to_lowercase();
            if filestores.contains_key(&name) {
                return Err(format!("Filestore '{}' is already registered", name));
            }
            filestores.insert(name, Filedir::from_config(store_cfg)?);
        }
        if config.sheets.is_empty() {
            return Err("no sheets configured".to_string());
        }
        let mut sheets: Vec<Sheet> = Vec::with_capacity(config.sheets.len());
        for sheet_cfg in &config.sheets {
            let sheet = Sheet::from_config(sheet_cfg)?;
            if sheets.iter().any(|s| s.name == sheet.name) {
                return Err(format!("Sheet '{}' is already registered", sheet.name));
            }
            for store_name in &sheet.filestores {
                if !filestores.contains_key(&store_name.to_lowercase()) {
                    let known: Vec<&String> = filestores.keys().collect();
                    warn!("Known filestores: {:?}", known);
                    return Err(format!(
                        "Sheet '{}': unknown filestore '{}'",
                        sheet.name, store_name
                    ));
                }
            }
            sheets.push(sheet);
        }
        Ok(SheetService { sheets, filestores })
    }
    fn gen_config() -> String {
        let mut config = String::new();
        config.push_str(TOML_HEADER);
        config.push_str(&Filedir::gen_config());
        config.push_str(&Sheet::gen_config());
        config
    }
    fn gen_runtime_config(&self) -> String {
        let mut config = String::new();
        config.push_str(TOML_HEADER);
        for (name, store) in &self.filestores {
            config.push_str(&format!(
                "\n[[filestore]]\nname = \"{}\"\ntype = \"file\"\nbase = {:?}\n",
                name, store.basepath
            ));
        }
        for sheet in &self.sheets {
            config.push_str(&sheet.gen_runtime_config());
        }
        config
    }
}

const TOML_HEADER: &'static str = r#"# atlante grating configuration
"#;
