use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct DataPath {
    base: PathBuf,
}

impl DataPath {
    pub fn new(base: impl AsRef<Path>) -> Self {
        let base = base.as_ref().to_path_buf();
        Self { base }
    }

    pub fn default_base() -> Option<PathBuf> {
        dirs::data_local_dir().map(|pb| pb.join("agenda"))
    }

    pub fn default_base_or_cwd() -> PathBuf {
        Self::default_base().unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn rel_path(&self, typ: DataPathType) -> PathBuf {
        match typ {
            DataPathType::Log => PathBuf::from("logs"),
        }
    }

    pub fn path(&self, typ: DataPathType) -> PathBuf {
        self.base.join(self.rel_path(typ))
    }
}

impl Default for DataPath {
    fn default() -> Self {
        Self::new(Self::default_base_or_cwd())
    }
}

pub enum DataPathType {
    Log,
}
