//! WDC 65816 instruction set.

use crate::mode::{Mode, Size};
use crate::table::{Alias, Descriptor};

macro_rules! instructions {
	($($variant:ident $name:literal $class:ident,)*) => {
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
		pub enum Mnemonic {
			$($variant,)*
		}

		pub static INSTRUCTIONS: &[Descriptor] = &[
			$(Descriptor {
				mnemonic: Mnemonic::$variant,
				name: $name,
				class: Mode::$class,
			},)*
		];
	};
}

instructions! {
	Adc "adc" Implied,
	And "and" Implied,
	Asl "asl" Implied,
	Bcc "bcc" Relative,
	Bcs "bcs" Relative,
	Beq "beq" Relative,
	Bit "bit" Implied,
	Bmi "bmi" Relative,
	Bne "bne" Relative,
	Bpl "bpl" Relative,
	Bra "bra" Relative,
	Brk "brk" Implied,
	Brl "brl" RelativeLong,
	Bvc "bvc" Relative,
	Bvs "bvs" Relative,
	Clc "clc" Implied,
	Cld "cld" Implied,
	Cli "cli" Implied,
	Clv "clv" Implied,
	Cmp "cmp" Implied,
	Cop "cop" Immediate8,
	Cpx "cpx" Implied,
	Cpy "cpy" Implied,
	Dec "dec" Implied,
	Dex "dex" Implied,
	Dey "dey" Implied,
	Eor "eor" Implied,
	Inc "inc" Implied,
	Inx "inx" Implied,
	Iny "iny" Implied,
	Jmp "jmp" Implied,
	Jsr "jsr" Implied,
	Lda "lda" Implied,
	Ldx "ldx" Implied,
	Ldy "ldy" Implied,
	Lsr "lsr" Implied,
	Mvn "mvn" BlockMove,
	Mvp "mvp" BlockMove,
	Nop "nop" Implied,
	Ora "ora" Implied,
	Pea "pea" Implied,
	Pei "pei" Implied,
	Per "per" RelativeLong,
	Pha "pha" Implied,
	Phb "phb" Implied,
	Phd "phd" Implied,
	Phk "phk" Implied,
	Php "php" Implied,
	Phx "phx" Implied,
	Phy "phy" Implied,
	Pla "pla" Implied,
	Plb "plb" Implied,
	Pld "pld" Implied,
	Plp "plp" Implied,
	Plx "plx" Implied,
	Ply "ply" Implied,
	Rep "rep" Immediate8,
	Rol "rol" Implied,
	Ror "ror" Implied,
	Rti "rti" Implied,
	Rtl "rtl" Implied,
	Rts "rts" Implied,
	Sbc "sbc" Implied,
	Sec "sec" Implied,
	Sed "sed" Implied,
	Sei "sei" Implied,
	Sep "sep" Immediate8,
	Sta "sta" Implied,
	Stp "stp" Implied,
	Stx "stx" Implied,
	Sty "sty" Implied,
	Stz "stz" Implied,
	Tax "tax" Implied,
	Tay "tay" Implied,
	Tcd "tcd" Implied,
	Tcs "tcs" Implied,
	Tdc "tdc" Implied,
	Trb "trb" Implied,
	Tsb "tsb" Implied,
	Tsc "tsc" Implied,
	Tsx "tsx" Implied,
	Txa "txa" Implied,
	Txs "txs" Implied,
	Txy "txy" Implied,
	Tya "tya" Implied,
	Tyx "tyx" Implied,
	Wai "wai" Implied,
	Wdm "wdm" Immediate8,
	Xba "xba" Implied,
	Xce "xce" Implied,
}

pub static ALIASES: &[Alias] = &[
	Alias { name: "jml", mnemonic: Mnemonic::Jmp, size: Size::Long },
	Alias { name: "jsl", mnemonic: Mnemonic::Jsr, size: Size::Long },
];

use Mnemonic as M;
use Mode as O;

/// Indexed by opcode.
pub static OPCODES: [(Mnemonic, Mode); 256] = [
	/* $00 */ (M::Brk, O::Implied),
	/* $01 */ (M::Ora, O::XIndirect8),
	/* $02 */ (M::Cop, O::Immediate8),
	/* $03 */ (M::Ora, O::StackRelative),
	/* $04 */ (M::Tsb, O::Address8),
	/* $05 */ (M::Ora, O::Address8),
	/* $06 */ (M::Asl, O::Address8),
	/* $07 */ (M::Ora, O::Indirect8Long),
	/* $08 */ (M::Php, O::Implied),
	/* $09 */ (M::Ora, O::Immediate16),
	/* $0A */ (M::Asl, O::Implied),
	/* $0B */ (M::Phd, O::Implied),
	/* $0C */ (M::Tsb, O::Address16),
	/* $0D */ (M::Ora, O::Address16),
	/* $0E */ (M::Asl, O::Address16),
	/* $0F */ (M::Ora, O::Address24),
	/* $10 */ (M::Bpl, O::Relative),
	/* $11 */ (M::Ora, O::Indirect8Y),
	/* $12 */ (M::Ora, O::Indirect8),
	/* $13 */ (M::Ora, O::StackRelativeIndirectY),
	/* $14 */ (M::Trb, O::Address8),
	/* $15 */ (M::Ora, O::Indexed8X),
	/* $16 */ (M::Asl, O::Indexed8X),
	/* $17 */ (M::Ora, O::Indirect8YLong),
	/* $18 */ (M::Clc, O::Implied),
	/* $19 */ (M::Ora, O::Indexed16Y),
	/* $1A */ (M::Inc, O::Implied),
	/* $1B */ (M::Tcs, O::Implied),
	/* $1C */ (M::Trb, O::Address16),
	/* $1D */ (M::Ora, O::Indexed16X),
	/* $1E */ (M::Asl, O::Indexed16X),
	/* $1F */ (M::Ora, O::Indexed24X),
	/* $20 */ (M::Jsr, O::Address16),
	/* $21 */ (M::And, O::XIndirect8),
	/* $22 */ (M::Jsr, O::Address24),
	/* $23 */ (M::And, O::StackRelative),
	/* $24 */ (M::Bit, O::Address8),
	/* $25 */ (M::And, O::Address8),
	/* $26 */ (M::Rol, O::Address8),
	/* $27 */ (M::And, O::Indirect8Long),
	/* $28 */ (M::Plp, O::Implied),
	/* $29 */ (M::And, O::Immediate16),
	/* $2A */ (M::Rol, O::Implied),
	/* $2B */ (M::Pld, O::Implied),
	/* $2C */ (M::Bit, O::Address16),
	/* $2D */ (M::And, O::Address16),
	/* $2E */ (M::Rol, O::Address16),
	/* $2F */ (M::And, O::Address24),
	/* $30 */ (M::Bmi, O::Relative),
	/* $31 */ (M::And, O::Indirect8Y),
	/* $32 */ (M::And, O::Indirect8),
	/* $33 */ (M::And, O::StackRelativeIndirectY),
	/* $34 */ (M::Bit, O::Indexed8X),
	/* $35 */ (M::And, O::Indexed8X),
	/* $36 */ (M::Rol, O::Indexed8X),
	/* $37 */ (M::And, O::Indirect8YLong),
	/* $38 */ (M::Sec, O::Implied),
	/* $39 */ (M::And, O::Indexed16Y),
	/* $3A */ (M::Dec, O::Implied),
	/* $3B */ (M::Tsc, O::Implied),
	/* $3C */ (M::Bit, O::Indexed16X),
	/* $3D */ (M::And, O::Indexed16X),
	/* $3E */ (M::Rol, O::Indexed16X),
	/* $3F */ (M::And, O::Indexed24X),
	/* $40 */ (M::Rti, O::Implied),
	/* $41 */ (M::Eor, O::XIndirect8),
	/* $42 */ (M::Wdm, O::Immediate8),
	/* $43 */ (M::Eor, O::StackRelative),
	/* $44 */ (M::Mvp, O::BlockMove),
	/* $45 */ (M::Eor, O::Address8),
	/* $46 */ (M::Lsr, O::Address8),
	/* $47 */ (M::Eor, O::Indirect8Long),
	/* $48 */ (M::Pha, O::Implied),
	/* $49 */ (M::Eor, O::Immediate16),
	/* $4A */ (M::Lsr, O::Implied),
	/* $4B */ (M::Phk, O::Implied),
	/* $4C */ (M::Jmp, O::Address16),
	/* $4D */ (M::Eor, O::Address16),
	/* $4E */ (M::Lsr, O::Address16),
	/* $4F */ (M::Eor, O::Address24),
	/* $50 */ (M::Bvc, O::Relative),
	/* $51 */ (M::Eor, O::Indirect8Y),
	/* $52 */ (M::Eor, O::Indirect8),
	/* $53 */ (M::Eor, O::StackRelativeIndirectY),
	/* $54 */ (M::Mvn, O::BlockMove),
	/* $55 */ (M::Eor, O::Indexed8X),
	/* $56 */ (M::Lsr, O::Indexed8X),
	/* $57 */ (M::Eor, O::Indirect8YLong),
	/* $58 */ (M::Cli, O::Implied),
	/* $59 */ (M::Eor, O::Indexed16Y),
	/* $5A */ (M::Phy, O::Implied),
	/* $5B */ (M::Tcd, O::Implied),
	/* $5C */ (M::Jmp, O::Address24),
	/* $5D */ (M::Eor, O::Indexed16X),
	/* $5E */ (M::Lsr, O::Indexed16X),
	/* $5F */ (M::Eor, O::Indexed24X),
	/* $60 */ (M::Rts, O::Implied),
	/* $61 */ (M::Adc, O::XIndirect8),
	/* $62 */ (M::Per, O::RelativeLong),
	/* $63 */ (M::Adc, O::StackRelative),
	/* $64 */ (M::Stz, O::Address8),
	/* $65 */ (M::Adc, O::Address8),
	/* $66 */ (M::Ror, O::Address8),
	/* $67 */ (M::Adc, O::Indirect8Long),
	/* $68 */ (M::Pla, O::Implied),
	/* $69 */ (M::Adc, O::Immediate16),
	/* $6A */ (M::Ror, O::Implied),
	/* $6B */ (M::Rtl, O::Implied),
	/* $6C */ (M::Jmp, O::Indirect16),
	/* $6D */ (M::Adc, O::Address16),
	/* $6E */ (M::Ror, O::Address16),
	/* $6F */ (M::Adc, O::Address24),
	/* $70 */ (M::Bvs, O::Relative),
	/* $71 */ (M::Adc, O::Indirect8Y),
	/* $72 */ (M::Adc, O::Indirect8),
	/* $73 */ (M::Adc, O::StackRelativeIndirectY),
	/* $74 */ (M::Stz, O::Indexed8X),
	/* $75 */ (M::Adc, O::Indexed8X),
	/* $76 */ (M::Ror, O::Indexed8X),
	/* $77 */ (M::Adc, O::Indirect8YLong),
	/* $78 */ (M::Sei, O::Implied),
	/* $79 */ (M::Adc, O::Indexed16Y),
	/* $7A */ (M::Ply, O::Implied),
	/* $7B */ (M::Tdc, O::Implied),
	/* $7C */ (M::Jmp, O::XIndirect16),
	/* $7D */ (M::Adc, O::Indexed16X),
	/* $7E */ (M::Ror, O::Indexed16X),
	/* $7F */ (M::Adc, O::Indexed24X),
	/* $80 */ (M::Bra, O::Relative),
	/* $81 */ (M::Sta, O::XIndirect8),
	/* $82 */ (M::Brl, O::RelativeLong),
	/* $83 */ (M::Sta, O::StackRelative),
	/* $84 */ (M::Sty, O::Address8),
	/* $85 */ (M::Sta, O::Address8),
	/* $86 */ (M::Stx, O::Address8),
	/* $87 */ (M::Sta, O::Indirect8Long),
	/* $88 */ (M::Dey, O::Implied),
	/* $89 */ (M::Bit, O::Immediate16),
	/* $8A */ (M::Txa, O::Implied),
	/* $8B */ (M::Phb, O::Implied),
	/* $8C */ (M::Sty, O::Address16),
	/* $8D */ (M::Sta, O::Address16),
	/* $8E */ (M::Stx, O::Address16),
	/* $8F */ (M::Sta, O::Address24),
	/* $90 */ (M::Bcc, O::Relative),
	/* $91 */ (M::Sta, O::Indirect8Y),
	/* $92 */ (M::Sta, O::Indirect8),
	/* $93 */ (M::Sta, O::StackRelativeIndirectY),
	/* $94 */ (M::Sty, O::Indexed8X),
	/* $95 */ (M::Sta, O::Indexed8X),
	/* $96 */ (M::Stx, O::Indexed8Y),
	/* $97 */ (M::Sta, O::Indirect8YLong),
	/* $98 */ (M::Tya, O::Implied),
	/* $99 */ (M::Sta, O::Indexed16Y),
	/* $9A */ (M::Txs, O::Implied),
	/* $9B */ (M::Txy, O::Implied),
	/* $9C */ (M::Stz, O::Address16),
	/* $9D */ (M::Sta, O::Indexed16X),
	/* $9E */ (M::Stz, O::Indexed16X),
	/* $9F */ (M::Sta, O::Indexed24X),
	/* $A0 */ (M::Ldy, O::Immediate16),
	/* $A1 */ (M::Lda, O::XIndirect8),
	/* $A2 */ (M::Ldx, O::Immediate16),
	/* $A3 */ (M::Lda, O::StackRelative),
	/* $A4 */ (M::Ldy, O::Address8),
	/* $A5 */ (M::Lda, O::Address8),
	/* $A6 */ (M::Ldx, O::Address8),
	/* $A7 */ (M::Lda, O::Indirect8Long),
	/* $A8 */ (M::Tay, O::Implied),
	/* $A9 */ (M::Lda, O::Immediate16),
	/* $AA */ (M::Tax, O::Implied),
	/* $AB */ (M::Plb, O::Implied),
	/* $AC */ (M::Ldy, O::Address16),
	/* $AD */ (M::Lda, O::Address16),
	/* $AE */ (M::Ldx, O::Address16),
	/* $AF */ (M::Lda, O::Address24),
	/* $B0 */ (M::Bcs, O::Relative),
	/* $B1 */ (M::Lda, O::Indirect8Y),
	/* $B2 */ (M::Lda, O::Indirect8),
	/* $B3 */ (M::Lda, O::StackRelativeIndirectY),
	/* $B4 */ (M::Ldy, O::Indexed8X),
	/* $B5 */ (M::Lda, O::Indexed8X),
	/* $B6 */ (M::Ldx, O::Indexed8Y),
	/* $B7 */ (M::Lda, O::Indirect8YLong),
	/* $B8 */ (M::Clv, O::Implied),
	/* $B9 */ (M::Lda, O::Indexed16Y),
	/* $BA */ (M::Tsx, O::Implied),
	/* $BB */ (M::Tyx, O::Implied),
	/* $BC */ (M::Ldy, O::Indexed16X),
	/* $BD */ (M::Lda, O::Indexed16X),
	/* $BE */ (M::Ldx, O::Indexed16Y),
	/* $BF */ (M::Lda, O::Indexed24X),
	/* $C0 */ (M::Cpy, O::Immediate16),
	/* $C1 */ (M::Cmp, O::XIndirect8),
	/* $C2 */ (M::Rep, O::Immediate8),
	/* $C3 */ (M::Cmp, O::StackRelative),
	/* $C4 */ (M::Cpy, O::Address8),
	/* $C5 */ (M::Cmp, O::Address8),
	/* $C6 */ (M::Dec, O::Address8),
	/* $C7 */ (M::Cmp, O::Indirect8Long),
	/* $C8 */ (M::Iny, O::Implied),
	/* $C9 */ (M::Cmp, O::Immediate16),
	/* $CA */ (M::Dex, O::Implied),
	/* $CB */ (M::Wai, O::Implied),
	/* $CC */ (M::Cpy, O::Address16),
	/* $CD */ (M::Cmp, O::Address16),
	/* $CE */ (M::Dec, O::Address16),
	/* $CF */ (M::Cmp, O::Address24),
	/* $D0 */ (M::Bne, O::Relative),
	/* $D1 */ (M::Cmp, O::Indirect8Y),
	/* $D2 */ (M::Cmp, O::Indirect8),
	/* $D3 */ (M::Cmp, O::StackRelativeIndirectY),
	/* $D4 */ (M::Pei, O::Indirect8),
	/* $D5 */ (M::Cmp, O::Indexed8X),
	/* $D6 */ (M::Dec, O::Indexed8X),
	/* $D7 */ (M::Cmp, O::Indirect8YLong),
	/* $D8 */ (M::Cld, O::Implied),
	/* $D9 */ (M::Cmp, O::Indexed16Y),
	/* $DA */ (M::Phx, O::Implied),
	/* $DB */ (M::Stp, O::Implied),
	/* $DC */ (M::Jmp, O::Indirect16Long),
	/* $DD */ (M::Cmp, O::Indexed16X),
	/* $DE */ (M::Dec, O::Indexed16X),
	/* $DF */ (M::Cmp, O::Indexed24X),
	/* $E0 */ (M::Cpx, O::Immediate16),
	/* $E1 */ (M::Sbc, O::XIndirect8),
	/* $E2 */ (M::Sep, O::Immediate8),
	/* $E3 */ (M::Sbc, O::StackRelative),
	/* $E4 */ (M::Cpx, O::Address8),
	/* $E5 */ (M::Sbc, O::Address8),
	/* $E6 */ (M::Inc, O::Address8),
	/* $E7 */ (M::Sbc, O::Indirect8Long),
	/* $E8 */ (M::Inx, O::Implied),
	/* $E9 */ (M::Sbc, O::Immediate16),
	/* $EA */ (M::Nop, O::Implied),
	/* $EB */ (M::Xba, O::Implied),
	/* $EC */ (M::Cpx, O::Address16),
	/* $ED */ (M::Sbc, O::Address16),
	/* $EE */ (M::Inc, O::Address16),
	/* $EF */ (M::Sbc, O::Address24),
	/* $F0 */ (M::Beq, O::Relative),
	/* $F1 */ (M::Sbc, O::Indirect8Y),
	/* $F2 */ (M::Sbc, O::Indirect8),
	/* $F3 */ (M::Sbc, O::StackRelativeIndirectY),
	/* $F4 */ (M::Pea, O::Address16),
	/* $F5 */ (M::Sbc, O::Indexed8X),
	/* $F6 */ (M::Inc, O::Indexed8X),
	/* $F7 */ (M::Sbc, O::Indirect8YLong),
	/* $F8 */ (M::Sed, O::Implied),
	/* $F9 */ (M::Sbc, O::Indexed16Y),
	/* $FA */ (M::Plx, O::Implied),
	/* $FB */ (M::Xce, O::Implied),
	/* $FC */ (M::Jsr, O::XIndirect16),
	/* $FD */ (M::Sbc, O::Indexed16X),
	/* $FE */ (M::Inc, O::Indexed16X),
	/* $FF */ (M::Sbc, O::Indexed24X),
];

/// Opcode synthesized after a 16-bit jump to a forward label.
pub const NOP: u8 = 0xEA;
