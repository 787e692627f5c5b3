//! Cube catalog: kinds, colors, faces and the manufacturing sheet layout

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DrawError, Result};

use CubeColor::{Black, White};
use CubeKind::{Paper, Rock, Scissors, Wise};
use FaceKind::{Bottom, Top};

/// Cube kind
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CubeKind {
    Rock,
    Paper,
    Scissors,
    Wise,
}

/// Owning side, named after the cube color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CubeColor {
    White,
    Black,
}

/// Printable face of a cube
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaceKind {
    /// Face carrying the kind glyph
    Top,
    /// Face carrying the identity letter
    Bottom,
}

pub const CUBE_KINDS: [CubeKind; 4] = [
    CubeKind::Rock,
    CubeKind::Paper,
    CubeKind::Scissors,
    CubeKind::Wise,
];

pub const CUBE_COLORS: [CubeColor; 2] = [CubeColor::White, CubeColor::Black];

pub const FACE_KINDS: [FaceKind; 2] = [FaceKind::Top, FaceKind::Bottom];

impl CubeKind {
    pub fn name(self) -> &'static str {
        match self {
            CubeKind::Rock => "rock",
            CubeKind::Paper => "paper",
            CubeKind::Scissors => "scissors",
            CubeKind::Wise => "wise",
        }
    }

    /// Identity symbol printed on the bottom face
    pub fn symbol(self) -> &'static str {
        match self {
            CubeKind::Rock => "R",
            CubeKind::Paper => "P",
            CubeKind::Scissors => "S",
            CubeKind::Wise => "W",
        }
    }
}

impl CubeColor {
    pub fn name(self) -> &'static str {
        match self {
            CubeColor::White => "white",
            CubeColor::Black => "black",
        }
    }

    /// Paint of the cube body
    pub fn body_paint(self) -> &'static str {
        self.name()
    }

    /// Paint of artwork drawn on the cube body
    pub fn ink_paint(self) -> &'static str {
        match self {
            CubeColor::White => "black",
            CubeColor::Black => "white",
        }
    }
}

impl FaceKind {
    pub fn name(self) -> &'static str {
        match self {
            FaceKind::Top => "top",
            FaceKind::Bottom => "bottom",
        }
    }
}

/// A cube kind, color or face name that matches no entry
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("Unknown {what} name: {name:?}")]
pub struct ParseNameError {
    pub what: &'static str,
    pub name: String,
}

macro_rules! impl_name_traits {
    ($ty:ty, $all:expr, $what:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $ty {
            type Err = ParseNameError;

            fn from_str(s: &str) -> std::result::Result<Self, ParseNameError> {
                $all.iter()
                    .copied()
                    .find(|v| v.name().eq_ignore_ascii_case(s.trim()))
                    .ok_or_else(|| ParseNameError {
                        what: $what,
                        name: s.to_string(),
                    })
            }
        }
    };
}

impl_name_traits!(CubeKind, CUBE_KINDS, "kind");
impl_name_traits!(CubeColor, CUBE_COLORS, "color");
impl_name_traits!(FaceKind, FACE_KINDS, "face");

/// One physical cube
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cube {
    pub kind: CubeKind,
    pub color: CubeColor,
}

impl Cube {
    pub const fn new(kind: CubeKind, color: CubeColor) -> Self {
        Self { kind, color }
    }
}

/// One printable face design: cube kind x color x face
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FaceVariant {
    pub kind: CubeKind,
    pub color: CubeColor,
    pub face: FaceKind,
}

impl FaceVariant {
    pub const fn new(kind: CubeKind, color: CubeColor, face: FaceKind) -> Self {
        Self { kind, color, face }
    }

    /// Look a variant up in the catalog
    pub fn lookup(kind: CubeKind, color: CubeColor, face: FaceKind) -> Result<Self> {
        FACE_CATALOG
            .iter()
            .copied()
            .find(|v| v.kind == kind && v.color == color && v.face == face)
            .ok_or_else(|| unknown_variant(kind.name(), color.name(), face.name()))
    }

    /// Parse names such as ("wise", "black", "top")
    pub fn parse(kind: &str, color: &str, face: &str) -> Result<Self> {
        let unknown = |_: ParseNameError| unknown_variant(kind, color, face);
        Self::lookup(
            kind.parse::<CubeKind>().map_err(unknown)?,
            color.parse::<CubeColor>().map_err(unknown)?,
            face.parse::<FaceKind>().map_err(unknown)?,
        )
    }

    /// Deterministic file stem, e.g. `pijersi_face_rock_white_top`
    pub fn file_stem(&self) -> String {
        format!("pijersi_face_{}_{}_{}", self.kind, self.color, self.face)
    }
}

fn unknown_variant(kind: &str, color: &str, face: &str) -> DrawError {
    DrawError::UnknownPieceVariant {
        kind: kind.to_string(),
        color: color.to_string(),
        face: face.to_string(),
    }
}

/// Every face design that gets manufactured
pub static FACE_CATALOG: [FaceVariant; 16] = [
    FaceVariant::new(Rock, White, Top),
    FaceVariant::new(Rock, White, Bottom),
    FaceVariant::new(Rock, Black, Top),
    FaceVariant::new(Rock, Black, Bottom),
    FaceVariant::new(Paper, White, Top),
    FaceVariant::new(Paper, White, Bottom),
    FaceVariant::new(Paper, Black, Top),
    FaceVariant::new(Paper, Black, Bottom),
    FaceVariant::new(Scissors, White, Top),
    FaceVariant::new(Scissors, White, Bottom),
    FaceVariant::new(Scissors, Black, Top),
    FaceVariant::new(Scissors, Black, Bottom),
    FaceVariant::new(Wise, White, Top),
    FaceVariant::new(Wise, White, Bottom),
    FaceVariant::new(Wise, Black, Top),
    FaceVariant::new(Wise, Black, Bottom),
];

/// Rows of the cube sheet
pub const SHEET_ROWS: usize = 6;

/// Columns of the cube sheet
pub const SHEET_COLS: usize = 6;

const BR: Option<Cube> = Some(Cube::new(Rock, Black));
const BP: Option<Cube> = Some(Cube::new(Paper, Black));
const BS: Option<Cube> = Some(Cube::new(Scissors, Black));
const BW: Option<Cube> = Some(Cube::new(Wise, Black));
const WR: Option<Cube> = Some(Cube::new(Rock, White));
const WP: Option<Cube> = Some(Cube::new(Paper, White));
const WS: Option<Cube> = Some(Cube::new(Scissors, White));
const WW: Option<Cube> = Some(Cube::new(Wise, White));
const NO: Option<Cube> = None;

/// Placement of the full cube set on the manufacturing sheet, top row first
pub static SHEET_LAYOUT: [[Option<Cube>; SHEET_COLS]; SHEET_ROWS] = [
    [BR, BR, BR, BR, BW, BW],
    [BP, BP, BP, BP, NO, NO],
    [BS, BS, BS, BS, NO, NO],
    [WS, WS, WS, WS, NO, NO],
    [WP, WP, WP, WP, NO, NO],
    [WR, WR, WR, WR, WW, WW],
];

#[cfg(test)]
mod tests {
    use super::*;

    /// Cubes of one color in a full set
    const CUBES_PER_COLOR: usize = 14;

    #[test]
    fn test_parse_names() {
        assert_eq!("rock".parse::<CubeKind>(), Ok(CubeKind::Rock));
        assert_eq!("Wise".parse::<CubeKind>(), Ok(CubeKind::Wise));
        assert_eq!("black".parse::<CubeColor>(), Ok(CubeColor::Black));
        assert_eq!("bottom".parse::<FaceKind>(), Ok(FaceKind::Bottom));
        assert_eq!(
            "king".parse::<CubeKind>(),
            Err(ParseNameError {
                what: "kind",
                name: "king".to_string(),
            })
        );
        assert_eq!(
            "green".parse::<CubeColor>().unwrap_err().to_string(),
            "Unknown color name: \"green\""
        );
    }

    #[test]
    fn test_variant_lookup() {
        let v = FaceVariant::parse("scissors", "white", "top").unwrap();
        assert_eq!(v, FaceVariant::new(CubeKind::Scissors, CubeColor::White, FaceKind::Top));
        assert_eq!(v.file_stem(), "pijersi_face_scissors_white_top");

        match FaceVariant::parse("X", "A", "top") {
            Err(DrawError::UnknownPieceVariant { kind, color, face }) => {
                assert_eq!((kind.as_str(), color.as_str(), face.as_str()), ("X", "A", "top"));
            }
            other => panic!("expected UnknownPieceVariant, got {:?}", other),
        }
        assert!(FaceVariant::parse("rock", "white", "side").is_err());
    }

    #[test]
    fn test_catalog_is_complete_and_unique() {
        for kind in CUBE_KINDS {
            for color in CUBE_COLORS {
                for face in FACE_KINDS {
                    assert!(FaceVariant::lookup(kind, color, face).is_ok());
                }
            }
        }
        let stems: std::collections::HashSet<_> =
            FACE_CATALOG.iter().map(|v| v.file_stem()).collect();
        assert_eq!(stems.len(), FACE_CATALOG.len());
    }

    #[test]
    fn test_sheet_holds_full_set() {
        let cubes: Vec<Cube> = SHEET_LAYOUT.iter().flatten().flatten().copied().collect();
        assert_eq!(cubes.len(), 2 * CUBES_PER_COLOR);

        for color in CUBE_COLORS {
            let count = |kind| cubes.iter().filter(|c| c.kind == kind && c.color == color).count();
            assert_eq!(count(CubeKind::Rock), 4);
            assert_eq!(count(CubeKind::Paper), 4);
            assert_eq!(count(CubeKind::Scissors), 4);
            assert_eq!(count(CubeKind::Wise), 2);
        }
    }
}
