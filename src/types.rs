//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Grid dimensions (columns x rows)
pub const GRID_WIDTH: u8 = 23;
pub const GRID_HEIGHT: u8 = 22;

/// Game timing constants (in milliseconds)
pub const TICK_MS: u32 = 16;
pub const DROP_INTERVAL_MS: u32 = 500;

/// Score awarded per simultaneous line clear (index = lines cleared)
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Per-line score for 5+ simultaneous clears (oversized pieces only)
pub const EXTRA_LINE_SCORE: u32 = 200;

/// Horizontal kick offsets tried when a rotation collides, in order
pub const ROTATION_KICKS: [i8; 5] = [0, -1, 1, -2, 2];

/// Number of piece kinds in the set (one bag cycle)
pub const PIECE_KIND_COUNT: usize = 14;

/// Piece kinds - the classic shapes plus the extended custom set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
    A,
}

impl PieceKind {
    /// All kinds in identity order (one full bag)
    pub const ALL: [PieceKind; PIECE_KIND_COUNT] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::R,
        PieceKind::S,
        PieceKind::T,
        PieceKind::U,
        PieceKind::V,
        PieceKind::W,
        PieceKind::X,
        PieceKind::Y,
        PieceKind::Z,
        PieceKind::A,
    ];

    /// Stable 1-based identity, written into board cells and used for color lookup
    pub fn id(self) -> u8 {
        self as u8 + 1
    }

    /// Parse piece kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "o" => Some(PieceKind::O),
            "r" => Some(PieceKind::R),
            "s" => Some(PieceKind::S),
            "t" => Some(PieceKind::T),
            "u" => Some(PieceKind::U),
            "v" => Some(PieceKind::V),
            "w" => Some(PieceKind::W),
            "x" => Some(PieceKind::X),
            "y" => Some(PieceKind::Y),
            "z" => Some(PieceKind::Z),
            "a" => Some(PieceKind::A),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::O => "o",
            PieceKind::R => "r",
            PieceKind::S => "s",
            PieceKind::T => "t",
            PieceKind::U => "u",
            PieceKind::V => "v",
            PieceKind::W => "w",
            PieceKind::X => "x",
            PieceKind::Y => "y",
            PieceKind::Z => "z",
            PieceKind::A => "a",
        }
    }
}

/// Game commands issued by the input collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    SoftDrop,
    HardDrop,
    Rotate,
    Pause,
    Restart,
}
