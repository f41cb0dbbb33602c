use std::fmt;
use std::fs;
use serde::Deserialize;
use log::LevelFilter;

use crate::{
    Error,
    core::{
        config::Config,
        Result
    },
};

pub const DEFAULT_PRIMARY_PATH: &str = "test-data/test-contacts.xlsx";
pub const DEFAULT_BACKUP_PATH: &str = "test-data/backup-contacts.xlsx";
pub const DEFAULT_PERFORMANCE_COUNT: usize = 100;

#[derive(Clone, Deserialize)]
struct LogCfg {
    #[serde(rename = "level")]
    level   : String,
    #[serde(rename = "logFile")]
    file    : Option<String>,

    #[serde(skip)]
    deserde_level: Option<LevelFilter>,
}

#[derive(Clone, Deserialize)]
struct Configuration {
    #[serde(rename = "deviceId")]
    device_id   : Option<String>,
    #[serde(rename = "primaryPath")]
    primary     : Option<String>,
    #[serde(rename = "backupPath")]
    backup      : Option<String>,
    #[serde(rename = "performanceCount")]
    perf_count  : Option<usize>,

    #[serde(rename = "logger")]
    logger      : Option<LogCfg>,
}

pub struct Builder<'a> {
    device_id   : Option<&'a str>,
    primary     : Option<&'a str>,
    backup      : Option<&'a str>,
    perf_count  : Option<usize>,

    log_level   : Option<LevelFilter>,
    log_file    : Option<&'a str>,

    cfg         : Option<Configuration>,
}

impl<'a> Builder<'a> {
    pub fn new() -> Builder<'a> {
        Self {
            device_id   : None,
            primary     : None,
            backup      : None,
            perf_count  : None,
            log_level   : None,
            log_file    : None,
            cfg         : None,
        }
    }

    pub fn with_device_id(&mut self, device_id: &'a str) -> &mut Self {
        self.device_id = Some(device_id);
        self
    }

    pub fn with_primary_path(&mut self, path: &'a str) -> &mut Self {
        self.primary = Some(path);
        self
    }

    pub fn with_backup_path(&mut self, path: &'a str) -> &mut Self {
        self.backup = Some(path);
        self
    }

    pub fn with_performance_count(&mut self, count: usize) -> &mut Self {
        self.perf_count = Some(count);
        self
    }

    pub fn with_logger(&mut self, level: LevelFilter, file: Option<&'a str>) -> &mut Self {
        self.log_level = Some(level);
        self.log_file = file;
        self
    }

    pub fn load(&mut self, input: &str) -> Result<&mut Self> {
        let data = fs::read_to_string(input).map_err(|e| {
            Error::Io(format!("Reading config error: {}", e))
        })?;

        let cfg = serde_json::from_str::<Configuration>(&data).map_err(|e| {
            Error::Argument(format!("bad config, error: {}", e))
        })?;

        self.cfg = Some(cfg);
        Ok(self)
    }

    pub fn build(&mut self) -> Result<Box<dyn Config>> {
        Ok(Box::new(Configuration::new(self)?))
    }
}

impl<'a> Default for Builder<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl Configuration {
    fn new(b: &Builder) -> Result<Self> {
        let mut cfg = match b.cfg.as_ref() {
            Some(cfg) => cfg.clone(),
            None => Self {
                device_id   : None,
                primary     : None,
                backup      : None,
                perf_count  : None,
                logger      : None,
            }
        };

        if let Some(id) = b.device_id {
            cfg.device_id = Some(id.to_string());
        }
        match cfg.device_id.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => cfg.device_id = Some(id.to_string()),
            _ => return Err(Error::Argument("Missing device id".into())),
        }

        if let Some(path) = b.primary {
            cfg.primary = Some(path.to_string());
        }
        if let Some(path) = b.backup {
            cfg.backup = Some(path.to_string());
        }
        if let Some(count) = b.perf_count {
            cfg.perf_count = Some(count);
        }

        if b.log_level.is_some() {
            cfg.logger = Some(LogCfg {
                level: b.log_level.unwrap_or(LevelFilter::Info).to_string(),
                file: b.log_file.map(|f| f.to_string()),
                deserde_level: b.log_level,
            });
        } else if let Some(ref mut logger) = cfg.logger {
            logger.deserde_level = Some(
                logger.level.parse::<LevelFilter>().unwrap_or(LevelFilter::Info)
            );
        } else {
            cfg.logger = Some(LogCfg {
                level: LevelFilter::Info.to_string(),
                file: b.log_file.map(|f| f.to_string()),
                deserde_level: Some(LevelFilter::Info),
            });
        }

        Ok(cfg)
    }
}

impl Config for Configuration {
    fn device_id(&self) -> &str {
        self.device_id.as_deref().unwrap_or_default()
    }

    fn primary_path(&self) -> &str {
        self.primary.as_deref().unwrap_or(DEFAULT_PRIMARY_PATH)
    }

    fn backup_path(&self) -> &str {
        self.backup.as_deref().unwrap_or(DEFAULT_BACKUP_PATH)
    }

    fn performance_count(&self) -> usize {
        self.perf_count.unwrap_or(DEFAULT_PERFORMANCE_COUNT)
    }

    fn log_level(&self) -> LevelFilter {
        self.logger.as_ref()
            .and_then(|v| v.deserde_level)
            .unwrap_or(LevelFilter::Info)
    }

    fn log_file(&self) -> Option<&str> {
        self.logger.as_ref().and_then(|v| v.file.as_deref())
    }

    #[cfg(feature = "inspect")]
    fn dump(&self) {
        println!("config: {}", self);
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "device:{},", self.device_id())?;
        write!(f, "\tprimary:{},", self.primary_path())?;
        write!(f, "\tbackup:{},", self.backup_path())?;
        write!(f, "\tperformance:{},", self.performance_count())?;
        write!(f, "\tlog:{}", self.log_level())?;
        if let Some(file) = self.log_file() {
            write!(f, "@{}", file)?;
        }
        Ok(())
    }
}
