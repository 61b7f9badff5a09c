use crate::collection::OrderedCollection;
use crate::model::{Action, Adventure, General};
use crate::statics;
use anyhow::Context;
use flate2::{Compression, GzBuilder, read::GzDecoder};
use serde::Deserialize;
use std::{
    fs,
    io::{Read, Write},
    path::{Path, PathBuf},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdventureFormat {
    Json5,
    GzipJson5,
}

/// Shape of the JSON import files: the adventure name comes from the folder.
#[derive(Debug, Deserialize)]
struct AdventureImport {
    #[serde(default)]
    generals: OrderedCollection<General>,
    #[serde(default)]
    actions: OrderedCollection<Action>,
}

/// The adventure being edited plus where it came from.
#[derive(Debug, Clone)]
pub struct AdventureDocument {
    pub source_path: Option<PathBuf>,
    pub format: AdventureFormat,
    pub adventure: Adventure,
    pub dirty: bool,
}

impl Default for AdventureDocument {
    fn default() -> Self {
        Self::new(Adventure::empty())
    }
}

impl AdventureDocument {
    pub fn new(adventure: Adventure) -> Self {
        Self {
            source_path: None,
            format: AdventureFormat::Json5,
            adventure,
            dirty: false,
        }
    }

    pub fn open(path: &Path) -> anyhow::Result<Self> {
        let bytes = fs::read(path).with_context(|| format!("reading {path:?}"))?;
        let format = detect_format(path, &bytes);
        let text_bytes = match format {
            AdventureFormat::Json5 => bytes,
            AdventureFormat::GzipJson5 => {
                let mut decoder = GzDecoder::new(&bytes[..]);
                let mut out = Vec::new();
                decoder.read_to_end(&mut out).context("gzip decompress")?;
                out
            }
        };

        let text =
            std::str::from_utf8(&text_bytes).context("adventure file is not valid UTF-8")?;
        let mut adventure: Adventure = json5::from_str(text).context("parsing adventure")?;
        adventure.normalize().context("validating adventure")?;
        tracing::info!(
            "Opened adventure {:?} from {path:?} ({} actions, {} generals)",
            adventure.name,
            adventure.actions().len(),
            adventure.generals().len()
        );

        Ok(Self {
            source_path: Some(path.to_path_buf()),
            format,
            adventure,
            dirty: false,
        })
    }

    /// Import the `{generals, actions}` JSON layout. The adventure is named after the
    /// directory holding the file.
    pub fn import_json(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path).with_context(|| format!("reading {path:?}"))?;
        let import: AdventureImport =
            serde_json::from_str(&text).context("parsing adventure JSON")?;
        let name = path
            .parent()
            .and_then(Path::file_name)
            .or_else(|| path.file_stem())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| statics::EN_EMPTY_ADVENTURE_NAME.to_string());
        let mut adventure = Adventure::from_parts(name, import.generals, import.actions);
        adventure.normalize().context("validating adventure")?;
        tracing::info!("Imported adventure {:?} from {path:?}", adventure.name);

        let mut doc = Self::new(adventure);
        doc.dirty = true;
        Ok(doc)
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn bytes_for_format(&self, format: AdventureFormat) -> anyhow::Result<Vec<u8>> {
        let mut text =
            serde_json::to_string_pretty(&self.adventure).context("serializing adventure")?;
        text.push('\n');

        match format {
            AdventureFormat::Json5 => Ok(text.into_bytes()),
            AdventureFormat::GzipJson5 => {
                let mut encoder = GzBuilder::new()
                    .mtime(0)
                    .write(Vec::new(), Compression::default());
                encoder
                    .write_all(text.as_bytes())
                    .context("gzip compress")?;
                let bytes = encoder.finish().context("gzip finish")?;
                Ok(bytes)
            }
        }
    }

    pub fn save_to_path(&mut self, path: &Path) -> anyhow::Result<()> {
        let target_format = format_for_path(path);
        let bytes = self.bytes_for_format(target_format)?;
        fs::write(path, &bytes).with_context(|| format!("writing {path:?}"))?;
        tracing::info!("Saved adventure {:?} to {path:?}", self.adventure.name);

        self.source_path = Some(path.to_path_buf());
        self.format = target_format;
        self.dirty = false;
        Ok(())
    }
}

fn format_for_path(path: &Path) -> AdventureFormat {
    if path.extension().and_then(|e| e.to_str()) == Some(statics::ADV_EXT_GZIP) {
        AdventureFormat::GzipJson5
    } else {
        AdventureFormat::Json5
    }
}

fn detect_format(path: &Path, bytes: &[u8]) -> AdventureFormat {
    if format_for_path(path) == AdventureFormat::GzipJson5 {
        return AdventureFormat::GzipJson5;
    }
    // Gzip magic: 1F 8B
    if bytes.len() >= 2 && bytes[0] == 0x1F && bytes[1] == 0x8B {
        return AdventureFormat::GzipJson5;
    }
    AdventureFormat::Json5
}
