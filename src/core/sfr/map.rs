// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut

//! Special function registers (SWRU191 Table 2-1, SFR Overview)
//!
//! Unassigned slots: 0x8E, 0x99, 0xAA, 0xB0, 0xB7, 0xC8.
//!
//! Reserved bits of bit-addressable registers keep a leading underscore so
//! that every position stays named.

use super::{RegisterInfo, Sfr, SfrBit};

sfr_map! {
    /// Port 0
    0x80 => P0 [P0_7, P0_6, P0_5, P0_4, P0_3, P0_2, P0_1, P0_0];
    /// Stack pointer
    0x81 => SP;
    /// Data pointer 0 low byte
    0x82 => DPL0;
    /// Data pointer 0 high byte
    0x83 => DPH0;
    /// Data pointer 1 low byte
    0x84 => DPL1;
    /// Data pointer 1 high byte
    0x85 => DPH1;
    /// USART 0 control and status
    0x86 => U0CSR;
    /// Power mode control
    0x87 => PCON;

    /// Interrupt flags
    0x88 => TCON [URX1IF, _TCON_6, ADCIF, _TCON_4, URX0IF, _TCON_2, RFTXRXIF, _TCON_0];
    /// Port 0 interrupt status flags
    0x89 => P0IFG;
    /// Port 1 interrupt status flags
    0x8A => P1IFG;
    /// Port 2 interrupt status flags
    0x8B => P2IFG;
    /// Port pins interrupt mask and edge
    0x8C => PICTL;
    /// Port 1 interrupt mask
    0x8D => P1IEN;
    /// Port 0 input mode
    0x8F => P0INP;

    /// Port 1
    0x90 => P1 [P1_7, P1_6, P1_5, P1_4, P1_3, P1_2, P1_1, P1_0];
    /// RF interrupt mask
    0x91 => RFIM;
    /// Data pointer select
    0x92 => DPS;
    /// XDATA page used by `MOVX @Ri`; SDCC's `pdata` page register
    0x93 => _XPAGE;
    /// Timer 2 control
    0x94 => T2CTRL;
    /// Sleep timer 0
    0x95 => ST0;
    /// Sleep timer 1
    0x96 => ST1;
    /// Sleep timer 2
    0x97 => ST2;

    /// Interrupt flags 2
    0x98 => S0CON [_SOCON7, _SOCON6, _SOCON5, _SOCON4, _SOCON3, _SOCON2, ENCIF_1, ENCIF_0];
    /// Interrupt enable 2
    0x9A => IEN2;
    /// Interrupt flags 3
    0x9B => S1CON;
    /// Timer 2 event output configuration
    0x9C => T2EVTCFG;
    /// Sleep mode control status
    0x9D => SLEEPSTA;
    /// Clock control status
    0x9E => CLKCONSTA;
    /// Flash bank map
    0x9F => FMAP;

    /// Port 2
    0xA0 => P2 [P2_7, P2_6, P2_5, P2_4, P2_3, P2_2, P2_1, P2_0];
    /// Timer 2 interrupt flags
    0xA1 => T2IRQF;
    /// Timer 2 multiplexed register 0
    0xA2 => T2M0;
    /// Timer 2 multiplexed register 1
    0xA3 => T2M1;
    /// Timer 2 multiplexed overflow register 0
    0xA4 => T2MOVF0;
    /// Timer 2 multiplexed overflow register 1
    0xA5 => T2MOVF1;
    /// Timer 2 multiplexed overflow register 2
    0xA6 => T2MOVF2;
    /// Timer 2 interrupt mask
    0xA7 => T2IRQM;

    /// Interrupt enable 0
    0xA8 => IEN0 [EA, _IEN06, STIE, ENCIE, URX1IE, URX0IE, ADCIE, RFTXRXIE];
    /// Interrupt priority 0
    0xA9 => IP0;
    /// Port 0 interrupt mask
    0xAB => P0IEN;
    /// Port 2 interrupt mask
    0xAC => P2IEN;
    /// Sleep timer load status
    0xAD => STLOAD;
    /// Power-down signal mux
    0xAE => PMUX;
    /// Timer 1 status
    0xAF => T1STAT;

    /// Encryption input data
    0xB1 => ENCDI;
    /// Encryption output data
    0xB2 => ENCDO;
    /// Encryption control and status
    0xB3 => ENCCS;
    /// ADC control 1
    0xB4 => ADCCON1;
    /// ADC control 2
    0xB5 => ADCCON2;
    /// ADC control 3
    0xB6 => ADCCON3;

    /// Interrupt enable 1
    0xB8 => IEN1 [_IEN17, _IEN16, P0IE, T4IE, T3IE, T2IE, T1IE, DMAIE];
    /// Interrupt priority 1
    0xB9 => IP1;
    /// ADC data low
    0xBA => ADCL;
    /// ADC data high
    0xBB => ADCH;
    /// Random number generator data low
    0xBC => RNDL;
    /// Random number generator data high
    0xBD => RNDH;
    /// Sleep mode control command
    0xBE => SLEEP;
    /// RF error interrupt flags
    0xBF => RFERRF;

    /// Interrupt flags 4
    0xC0 => IRCON [STIF, _IRCON6, P0IF, T4IF, T3IF, T2IF, T1IF, DMAIF];
    /// USART 0 receive/transmit data buffer
    0xC1 => U0DBUF;
    /// USART 0 baud-rate control
    0xC2 => U0BAUD;
    /// Timer 2 multiplex select
    0xC3 => T2MSEL;
    /// USART 0 UART control
    0xC4 => U0UCR;
    /// USART 0 generic control
    0xC5 => U0GCR;
    /// Clock control command
    0xC6 => CLKCON;
    /// Memory arbiter control
    0xC7 => MEMCTR;

    /// Watchdog timer control
    0xC9 => WDCTL;
    /// Timer 3 counter
    0xCA => T3CNT;
    /// Timer 3 control
    0xCB => T3CTL;
    /// Timer 3 channel 0 compare control
    0xCC => T3CCTL0;
    /// Timer 3 channel 0 compare value
    0xCD => T3CC0;
    /// Timer 3 channel 1 compare control
    0xCE => T3CCTL1;
    /// Timer 3 channel 1 compare value
    0xCF => T3CC1;

    /// Program status word
    0xD0 => PSW [CY, AC, F0, RS1, RS0, OV, F1, P];
    /// DMA interrupt flags
    0xD1 => DMAIRQ;
    /// DMA channel 1-4 configuration address low
    0xD2 => DMA1CFGL;
    /// DMA channel 1-4 configuration address high
    0xD3 => DMA1CFGH;
    /// DMA channel 0 configuration address low
    0xD4 => DMA0CFGL;
    /// DMA channel 0 configuration address high
    0xD5 => DMA0CFGH;
    /// DMA channel arm
    0xD6 => DMAARM;
    /// DMA channel start request and status
    0xD7 => DMAREQ;

    /// Timers 1/3/4 interrupt mask and flags
    0xD8 => TIMIF [_TIMIF7, OVFIM, T4CH1IF, T4CH0IF, T4OVFIF, T3CH1IF, T3CH0IF, T3OVFIF];
    /// RF data
    0xD9 => RFD;
    /// Timer 1 channel 0 capture/compare value low
    0xDA => T1CC0L;
    /// Timer 1 channel 0 capture/compare value high
    0xDB => T1CC0H;
    /// Timer 1 channel 1 capture/compare value low
    0xDC => T1CC1L;
    /// Timer 1 channel 1 capture/compare value high
    0xDD => T1CC1H;
    /// Timer 1 channel 2 capture/compare value low
    0xDE => T1CC2L;
    /// Timer 1 channel 2 capture/compare value high
    0xDF => T1CC2H;

    /// Accumulator
    0xE0 => ACC [ACC_7, ACC_6, ACC_5, ACC_4, ACC_3, ACC_2, ACC_1, ACC_0];
    /// RF command strobe
    0xE1 => RFST;
    /// Timer 1 counter low
    0xE2 => T1CNTL;
    /// Timer 1 counter high
    0xE3 => T1CNTH;
    /// Timer 1 control and status
    0xE4 => T1CTL;
    /// Timer 1 channel 0 capture/compare control
    0xE5 => T1CCTL0;
    /// Timer 1 channel 1 capture/compare control
    0xE6 => T1CCTL1;
    /// Timer 1 channel 2 capture/compare control
    0xE7 => T1CCTL2;

    /// Interrupt flags 5
    0xE8 => IRCON2 [_IRCON27, _IRCON26, _IRCON25, WDTIF, P1IF, UTX1IF, UTX0IF, P2IF];
    /// RF interrupt flags
    0xE9 => RFIRQF0;
    /// Timer 4 counter
    0xEA => T4CNT;
    /// Timer 4 control
    0xEB => T4CTL;
    /// Timer 4 channel 0 compare control
    0xEC => T4CCTL0;
    /// Timer 4 channel 0 compare value
    0xED => T4CC0;
    /// Timer 4 channel 1 compare control
    0xEE => T4CCTL1;
    /// Timer 4 channel 1 compare value
    0xEF => T4CC1;

    /// B register
    0xF0 => B [B_7, B_6, B_5, B_4, B_3, B_2, B_1, B_0];
    /// Peripheral I/O control
    0xF1 => PERCFG;
    /// ADC input configuration
    0xF2 => ADCCFG;
    /// Port 0 function select
    0xF3 => P0SEL;
    /// Port 1 function select
    0xF4 => P1SEL;
    /// Port 2 function select
    0xF5 => P2SEL;
    /// Port 1 input mode
    0xF6 => P1INP;
    /// Port 2 input mode
    0xF7 => P2INP;

    /// USART 1 control and status
    0xF8 => U1CSR [U1MODE, U1RE, U1SLAVE, U1FE, U1ERR, U1RX_BYTE, U1TX_BYTE, U1ACTIVE];
    /// USART 1 receive/transmit data buffer
    0xF9 => U1DBUF;
    /// USART 1 baud-rate control
    0xFA => U1BAUD;
    /// USART 1 UART control
    0xFB => U1UCR;
    /// USART 1 generic control
    0xFC => U1GCR;
    /// Port 0 direction
    0xFD => P0DIR;
    /// Port 1 direction
    0xFE => P1DIR;
    /// Port 2 direction
    0xFF => P2DIR;
}

/// Datasheet name of [`_XPAGE`]
pub const MPAGE: Sfr = _XPAGE;

/// USB interrupt flag; the USB controller shares the port 2 interrupt
pub const USBIF: SfrBit = P2IF;

/// Interrupt enable bits in IEN2 (not bit-addressable)
pub mod ien2 {
    pub const RFIE: u8 = 1 << 0;
    pub const P2IE: u8 = 1 << 1;
    pub const USBIE: u8 = P2IE;
    pub const UTX0IE: u8 = 1 << 2;
    pub const UTX1IE: u8 = 1 << 3;
    pub const P1IE: u8 = 1 << 4;
    pub const WDTIE: u8 = 1 << 5;
}

/// Interrupt flag bits in S1CON (not bit-addressable)
pub mod s1con {
    pub const RFIF_0: u8 = 1 << 0;
    pub const RFIF_1: u8 = 1 << 1;
    /// Both RF flag bits; hardware expects them written together
    pub const RFIF: u8 = RFIF_0 | RFIF_1;
}

/// Interrupt flag bits in S0CON
pub mod s0con {
    use super::{ENCIF_0, ENCIF_1};

    /// Both AES flag bits; hardware expects them written together
    pub const ENCIF: u8 = ENCIF_0.mask() | ENCIF_1.mask();
}
