//! Case-sensitive landmark names understood by the alignment and
//! measurement operations.

/// Left ear-canal reference of the Frankfurt horizontal.
pub const LEFT_EAR_FH: &str = "Left ear FH";
/// Right ear-canal reference of the Frankfurt horizontal.
pub const RIGHT_EAR_FH: &str = "Right ear FH";
/// Left orbit-base reference of the Frankfurt horizontal.
pub const LEFT_ORBIT_FH: &str = "Left orbit FH";

pub const NASION: &str = "Nasion";
pub const BASION: &str = "Basion";
pub const ANTERIOR_NASAL_SPINE: &str = "Anterior nasal spine";
pub const TONGUE_SUPERIOR: &str = "Tongue superior";
pub const VALLECULA: &str = "Vallecula";
pub const HYOID: &str = "Hyoid";
/// Antero-inferior point of the third cervical vertebra.
pub const C3_ANTERIOR: &str = "C3 anterior";
pub const MENTON: &str = "Menton";
pub const POGONION: &str = "Pogonion";
pub const LEFT_GONION: &str = "Left gonion";
pub const RIGHT_GONION: &str = "Right gonion";
pub const LEFT_CONDYLION: &str = "Left condylion";
pub const RIGHT_CONDYLION: &str = "Right condylion";

/// Frankfurt horizontal landmarks, in placement order.
pub const FH_LANDMARKS: [&str; 3] = [LEFT_EAR_FH, RIGHT_EAR_FH, LEFT_ORBIT_FH];

/// Airway and mandible landmarks, in placement order.
pub const AIRWAY_LANDMARKS: [&str; 13] = [
    NASION,
    BASION,
    ANTERIOR_NASAL_SPINE,
    TONGUE_SUPERIOR,
    VALLECULA,
    HYOID,
    C3_ANTERIOR,
    MENTON,
    POGONION,
    LEFT_GONION,
    RIGHT_GONION,
    LEFT_CONDYLION,
    RIGHT_CONDYLION,
];
