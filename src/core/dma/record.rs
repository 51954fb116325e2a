// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut

//! DMA channel configuration record
//!
//! The DMA controller reads its per-channel configuration from an 8-byte
//! record in XDATA. The layout is fixed by hardware:
//!
//! ```text
//! Byte | Bits | Field
//! -----|------|------------------------------------------
//! 0    | 7:0  | SRCADDR[15:8]
//! 1    | 7:0  | SRCADDR[7:0]
//! 2    | 7:0  | DESTADDR[15:8]
//! 3    | 7:0  | DESTADDR[7:0]
//! 4    | 7:5  | VLEN     variable length mode
//!      | 4:0  | LEN[12:8]
//! 5    | 7:0  | LEN[7:0]
//! 6    | 7    | WORDSIZE
//!      | 6:5  | TMODE    transfer mode
//!      | 4:0  | TRIG     trigger source
//! 7    | 7:6  | SRCINC
//!      | 5:4  | DESTINC
//!      | 3    | IRQMASK
//!      | 2    | M8       7-bit bytes in variable length mode
//!      | 1:0  | PRIORITY
//! ```
//!
//! Addresses and length are stored high byte first, the reverse of the
//! 16-bit SFR pairs.
//!
//! Every bit pattern decodes to a value, so decoding never fails and
//! encoding a decoded record gives back the same bytes.

use crate::core::error::DmaError;
use serde::Serialize;

/// Size of one configuration record
pub const RECORD_LEN: usize = 8;

/// Largest transfer length (13 bits)
pub const MAX_LENGTH: u16 = 0x1FFF;

/// VLEN: how the transfer length is determined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[repr(u8)]
pub enum VariableLength {
    /// Use LEN
    #[default]
    Fixed = 0,
    /// First byte/word of the source, plus one
    FirstPlusOne = 1,
    /// First byte/word of the source
    First = 2,
    /// First byte/word of the source, plus two
    FirstPlusTwo = 3,
    /// First byte/word of the source, plus three
    FirstPlusThree = 4,
    Reserved5 = 5,
    Reserved6 = 6,
    /// Alternative encoding of [`Fixed`](Self::Fixed)
    FixedAlt = 7,
}

impl VariableLength {
    /// Decode the field from its low bits
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0x07 {
            0 => VariableLength::Fixed,
            1 => VariableLength::FirstPlusOne,
            2 => VariableLength::First,
            3 => VariableLength::FirstPlusTwo,
            4 => VariableLength::FirstPlusThree,
            5 => VariableLength::Reserved5,
            6 => VariableLength::Reserved6,
            _ => VariableLength::FixedAlt,
        }
    }
}

/// WORDSIZE
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[repr(u8)]
pub enum WordSize {
    #[default]
    Byte = 0,
    Word = 1,
}

/// TMODE
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[repr(u8)]
pub enum TransferMode {
    /// One byte/word per trigger
    #[default]
    Single = 0,
    /// The whole block per trigger
    Block = 1,
    /// Single, re-armed after the last transfer
    RepeatedSingle = 2,
    /// Block, re-armed after the last transfer
    RepeatedBlock = 3,
}

impl TransferMode {
    /// Decode the field from its low bits
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0x03 {
            0 => TransferMode::Single,
            1 => TransferMode::Block,
            2 => TransferMode::RepeatedSingle,
            _ => TransferMode::RepeatedBlock,
        }
    }
}

/// SRCINC / DESTINC: address step after each transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[repr(u8)]
pub enum Increment {
    #[default]
    None = 0,
    /// One byte/word
    One = 1,
    /// Two bytes/words
    Two = 2,
    /// Back one byte/word
    MinusOne = 3,
}

impl Increment {
    /// Decode the field from its low bits
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0x03 {
            0 => Increment::None,
            1 => Increment::One,
            2 => Increment::Two,
            _ => Increment::MinusOne,
        }
    }
}

/// PRIORITY
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[repr(u8)]
pub enum Priority {
    #[default]
    Low = 0,
    /// High every second try
    Assured = 1,
    High = 2,
    Reserved = 3,
}

impl Priority {
    /// Decode the field from its low bits
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0x03 {
            0 => Priority::Low,
            1 => Priority::Assured,
            2 => Priority::High,
            _ => Priority::Reserved,
        }
    }
}

/// TRIG: DMA trigger source (0-31)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct DmaTrigger(u8);

impl DmaTrigger {
    pub const NONE: Self = Self(0);
    /// Previous channel done
    pub const PREV: Self = Self(1);
    pub const T1_CH0: Self = Self(2);
    pub const T1_CH1: Self = Self(3);
    pub const T1_CH2: Self = Self(4);
    pub const T2_EVENT1: Self = Self(5);
    pub const T2_EVENT2: Self = Self(6);
    pub const T3_CH0: Self = Self(7);
    pub const T3_CH1: Self = Self(8);
    pub const T4_CH0: Self = Self(9);
    pub const T4_CH1: Self = Self(10);
    /// Sleep timer compare
    pub const ST: Self = Self(11);
    /// Port 0 I/O pin input transition
    pub const IOC_0: Self = Self(12);
    /// Port 1 I/O pin input transition
    pub const IOC_1: Self = Self(13);
    pub const URX0: Self = Self(14);
    pub const UTX0: Self = Self(15);
    pub const URX1: Self = Self(16);
    pub const UTX1: Self = Self(17);
    /// Flash data write complete
    pub const FLASH: Self = Self(18);
    /// Radio
    pub const RADIO: Self = Self(19);
    /// ADC sequence sample ready
    pub const ADC_CHALL: Self = Self(20);
    /// ADC channel 0 sample ready; channels 1-7 follow at 22-28
    pub const ADC_CH0: Self = Self(21);
    /// AES download
    pub const ENC_DW: Self = Self(29);
    /// AES upload
    pub const ENC_UP: Self = Self(30);
    /// Debug interface burst write
    pub const DBG_BW: Self = Self(31);

    /// Largest trigger number
    pub const MAX: u8 = 31;

    pub fn new(trigger: u8) -> Result<Self, DmaError> {
        if trigger > Self::MAX {
            return Err(DmaError::TriggerOutOfRange(trigger));
        }
        Ok(Self(trigger))
    }

    /// ADC single-channel trigger for channel 0-7
    pub fn adc_channel(channel: u8) -> Result<Self, DmaError> {
        if channel > 7 {
            return Err(DmaError::TriggerOutOfRange(
                Self::ADC_CH0.0.saturating_add(channel),
            ));
        }
        Ok(Self(Self::ADC_CH0.0 + channel))
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

/// One DMA channel configuration
///
/// # Example
///
/// ```
/// use cc254x::core::dma::{DmaChannelConfig, DmaTrigger, Increment, TransferMode};
///
/// let mut config = DmaChannelConfig::new(0x0100, 0x70C1);
/// config.set_length(64).unwrap();
/// config.set_trigger(DmaTrigger::UTX0);
/// config.mode = TransferMode::Single;
/// config.src_inc = Increment::One;
///
/// let bytes = config.to_bytes();
/// assert_eq!(&bytes[..4], &[0x01, 0x00, 0x70, 0xC1]);
/// assert_eq!(DmaChannelConfig::from_bytes(bytes), config);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DmaChannelConfig {
    pub src: u16,
    pub dest: u16,
    pub vlen: VariableLength,
    length: u16,
    pub word_size: WordSize,
    pub mode: TransferMode,
    trigger: DmaTrigger,
    pub src_inc: Increment,
    pub dest_inc: Increment,
    /// Raise the DMA interrupt when the channel completes
    pub irq_mask: bool,
    /// Use 7 bits of the length byte in variable length mode
    pub m8: bool,
    pub priority: Priority,
}

impl DmaChannelConfig {
    /// Record moving data from `src` to `dest`, all other fields zero
    pub fn new(src: u16, dest: u16) -> Self {
        Self {
            src,
            dest,
            ..Self::default()
        }
    }

    pub fn length(&self) -> u16 {
        self.length
    }

    /// Set LEN; fails above 13 bits
    pub fn set_length(&mut self, length: u16) -> Result<(), DmaError> {
        if length > MAX_LENGTH {
            return Err(DmaError::LengthOutOfRange(length));
        }
        self.length = length;
        Ok(())
    }

    pub fn trigger(&self) -> DmaTrigger {
        self.trigger
    }

    pub fn set_trigger(&mut self, trigger: DmaTrigger) {
        self.trigger = trigger;
    }

    /// Encode into the hardware layout
    pub fn to_bytes(&self) -> [u8; RECORD_LEN] {
        let [src_h, src_l] = self.src.to_be_bytes();
        let [dest_h, dest_l] = self.dest.to_be_bytes();
        let [len_h, len_l] = self.length.to_be_bytes();

        let vlen_lenh = ((self.vlen as u8) << 5) | (len_h & 0x1F);
        let dc6 = ((self.word_size as u8) << 7)
            | ((self.mode as u8) << 5)
            | (self.trigger.0 & 0x1F);
        let dc7 = ((self.src_inc as u8) << 6)
            | ((self.dest_inc as u8) << 4)
            | ((self.irq_mask as u8) << 3)
            | ((self.m8 as u8) << 2)
            | (self.priority as u8);

        [src_h, src_l, dest_h, dest_l, vlen_lenh, len_l, dc6, dc7]
    }

    /// Decode from the hardware layout
    pub fn from_bytes(bytes: [u8; RECORD_LEN]) -> Self {
        let [src_h, src_l, dest_h, dest_l, vlen_lenh, len_l, dc6, dc7] = bytes;

        Self {
            src: u16::from_be_bytes([src_h, src_l]),
            dest: u16::from_be_bytes([dest_h, dest_l]),
            vlen: VariableLength::from_bits(vlen_lenh >> 5),
            length: u16::from_be_bytes([vlen_lenh & 0x1F, len_l]),
            word_size: if dc6 & 0x80 != 0 {
                WordSize::Word
            } else {
                WordSize::Byte
            },
            mode: TransferMode::from_bits(dc6 >> 5),
            trigger: DmaTrigger(dc6 & 0x1F),
            src_inc: Increment::from_bits(dc7 >> 6),
            dest_inc: Increment::from_bits(dc7 >> 4),
            irq_mask: dc7 & 0x08 != 0,
            m8: dc7 & 0x04 != 0,
            priority: Priority::from_bits(dc7),
        }
    }

    /// Decode from a slice that must hold exactly one record
    pub fn from_slice(bytes: &[u8]) -> Result<Self, DmaError> {
        let record: [u8; RECORD_LEN] = bytes
            .try_into()
            .map_err(|_| DmaError::InvalidRecordLength(bytes.len()))?;
        Ok(Self::from_bytes(record))
    }
}
