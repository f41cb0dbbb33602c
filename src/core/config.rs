use log::LevelFilter;

pub trait Config {
    fn device_id(&self) -> &str;

    fn primary_path(&self) -> &str;
    fn backup_path(&self) -> &str;

    fn performance_count(&self) -> usize;

    fn log_level(&self) -> LevelFilter;
    fn log_file(&self) -> Option<&str>;

    #[cfg(feature = "inspect")]
    fn dump(&self);
}
