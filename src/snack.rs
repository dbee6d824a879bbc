//! The closed set of snack identities a machine can carry.

use std::fmt;

#[derive(minicbor::Encode, minicbor::Decode, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Snack {
    #[n(0)]
    Doritos,
    #[n(1)]
    Oreos,
    #[n(2)]
    Pringles,
    #[n(3)]
    ReesePeanutButterCups,
    #[n(4)]
    Goldfish,
    #[n(5)]
    Cheetos,
    #[n(6)]
    MAndMs,
    #[n(7)]
    CheezIts,
    #[n(8)]
    GummyBears,
    #[n(9)]
    Fritos,
}

impl Snack {
    pub const ALL: [Snack; 10] = [
        Snack::Doritos,
        Snack::Oreos,
        Snack::Pringles,
        Snack::ReesePeanutButterCups,
        Snack::Goldfish,
        Snack::Cheetos,
        Snack::MAndMs,
        Snack::CheezIts,
        Snack::GummyBears,
        Snack::Fritos,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Snack::Doritos => "Doritos",
            Snack::Oreos => "Oreos",
            Snack::Pringles => "Pringles",
            Snack::ReesePeanutButterCups => "Reese's Peanut Butter Cups",
            Snack::Goldfish => "Goldfish",
            Snack::Cheetos => "Cheetos",
            Snack::MAndMs => "M&Ms",
            Snack::CheezIts => "Cheez-Its",
            Snack::GummyBears => "Gummy Bears",
            Snack::Fritos => "Fritos",
        }
    }

    /// Look a snack up by its display name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Snack> {
        Snack::ALL
            .into_iter()
            .find(|s| s.as_str().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Snack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
