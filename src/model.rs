//! CPU models, Apple II machine types and emulator run modes.

use serde::{Deserialize, Serialize};

/// Processor type.
///
/// `Z80` only ever appears as the *active* CPU (a CP/M card borrowing the bus);
/// the main CPU is always one of the two 6502 variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CpuType {
    /// Original NMOS 6502 (Apple ][, ][+, unenhanced //e, clones)
    #[serde(rename = "6502")]
    Mos6502,

    /// CMOS 65C02 (Enhanced //e, //c)
    #[serde(rename = "65C02")]
    Cmos65C02,

    /// Z80 co-processor card
    #[serde(rename = "Z80")]
    Z80,
}

impl CpuType {
    /// Default main CPU for a machine type.
    ///
    /// ```
    /// use a2cpu::{Apple2Model, CpuType};
    ///
    /// assert_eq!(CpuType::default_for(Apple2Model::AppleIIeEnhanced), CpuType::Cmos65C02);
    /// assert_eq!(CpuType::default_for(Apple2Model::AppleIIPlus), CpuType::Mos6502);
    /// ```
    pub fn default_for(model: Apple2Model) -> Self {
        if model.has_65c02() {
            CpuType::Cmos65C02
        } else {
            CpuType::Mos6502
        }
    }

    /// Returns true for the CMOS part.
    pub fn is_cmos(self) -> bool {
        self == CpuType::Cmos65C02
    }
}

/// Apple II family members (and clones) the core is used in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Apple2Model {
    #[serde(rename = "apple_ii")]
    AppleII,
    #[serde(rename = "apple_ii_plus")]
    AppleIIPlus,
    #[serde(rename = "apple_ii_j_plus")]
    AppleIIJPlus,
    #[serde(rename = "apple_iie")]
    AppleIIe,
    #[default]
    #[serde(rename = "apple_iie_enhanced")]
    AppleIIeEnhanced,
    #[serde(rename = "apple_iic")]
    AppleIIc,
    #[serde(rename = "apple_iic_plus")]
    AppleIIcPlus,
    #[serde(rename = "pravets_82")]
    Pravets82,
    #[serde(rename = "pravets_8m")]
    Pravets8M,
    #[serde(rename = "pravets_8a")]
    Pravets8A,
    #[serde(rename = "tk3000_iie")]
    Tk3000IIe,
    #[serde(rename = "base64a")]
    Base64A,
}

impl Apple2Model {
    // All Pravets clones are 6502 based.
    fn has_65c02(self) -> bool {
        matches!(
            self,
            Apple2Model::AppleIIeEnhanced
                | Apple2Model::Tk3000IIe
                | Apple2Model::AppleIIc
                | Apple2Model::AppleIIcPlus
        )
    }
}

/// Emulator run mode. Decides between the production and the
/// debugger-instrumented decoder variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunMode {
    #[default]
    Running,
    Benchmark,
    Stepping,
    Debug,
}

impl RunMode {
    /// Returns true when per-access debugger bookkeeping should run.
    pub fn is_debugger(self) -> bool {
        matches!(self, RunMode::Stepping | RunMode::Debug)
    }
}
