use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Endpoint {
    Move,
    PipetControl,
    Request,
}

impl Endpoint {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Move => "move",
            Self::PipetControl => "pipet_control",
            Self::Request => "request",
        }
    }

    /// Reads go out as GET without a body; everything else is a JSON POST.
    pub fn uses_get(self) -> bool {
        self == Self::Request
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoordinateSystem {
    #[default]
    CartesianAbs,
    CartesianRel,
    Polar,
}

impl CoordinateSystem {
    pub const ALL: [CoordinateSystem; 3] = [Self::CartesianAbs, Self::CartesianRel, Self::Polar];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::CartesianAbs => "cartesian_abs",
            Self::CartesianRel => "cartesian_rel",
            Self::Polar => "polar",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::CartesianAbs => "Cartesian (absolute)",
            Self::CartesianRel => "Cartesian (relative)",
            Self::Polar => "Polar",
        }
    }

    /// Display names for the three inputs. The payload keys stay `x`, `y`, `z`.
    pub fn axis_labels(self) -> [&'static str; 3] {
        match self {
            Self::CartesianAbs => ["X", "Y", "Z"],
            Self::CartesianRel => ["ΔX", "ΔY", "ΔZ"],
            Self::Polar => ["R", "θ", "Z"],
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|system| system.as_str() == name)
    }
}
