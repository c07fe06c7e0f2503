//! Supported mesh file formats.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::ExportError;

/// Mesh file formats that [`export`](crate::export) can write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// Wavefront OBJ, text.
    Obj,
    /// Stereolithography, binary.
    Stl,
}

impl ExportFormat {
    /// Detect format from file extension.
    #[must_use]
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?;
        ext.parse().ok()
    }

    /// Get the canonical file extension for this format.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Obj => "obj",
            Self::Stl => "stl",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    /// Parses a format name case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "obj" => Ok(Self::Obj),
            "stl" => Ok(Self::Stl),
            _ => Err(ExportError::UnsupportedFormat {
                format: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("obj".parse::<ExportFormat>().unwrap(), ExportFormat::Obj);
        assert_eq!("OBJ".parse::<ExportFormat>().unwrap(), ExportFormat::Obj);
        assert_eq!("Stl".parse::<ExportFormat>().unwrap(), ExportFormat::Stl);
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = "ply".parse::<ExportFormat>().unwrap_err();
        assert!(matches!(err, ExportError::UnsupportedFormat { ref format } if format == "ply"));
        assert_eq!(err.to_string(), "unsupported file format: ply");
        assert!("".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn format_from_path() {
        assert_eq!(ExportFormat::from_path("output/a.obj"), Some(ExportFormat::Obj));
        assert_eq!(ExportFormat::from_path("a.STL"), Some(ExportFormat::Stl));
        assert_eq!(ExportFormat::from_path("a.ply"), None);
        assert_eq!(ExportFormat::from_path("a"), None);
    }

    #[test]
    fn display_matches_extension() {
        assert_eq!(ExportFormat::Obj.to_string(), "obj");
        assert_eq!(ExportFormat::Stl.to_string(), "stl");
    }
}
