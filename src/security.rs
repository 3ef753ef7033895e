//! Security key derivation and the XOR obfuscation used for money, coins,
//! item quantities and Pokemon data. Every transform is its own inverse.

use byteorder::{ByteOrder, LittleEndian};
use serde::Serialize;

use crate::{fields, layout, GameVariant, Result};

pub const ENCRYPTED_DATA_SIZE: usize = 48;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SecurityContext {
    pub security_key: u32,
    pub variant: GameVariant,
}

impl SecurityContext {
    pub fn new(variant: GameVariant, security_key: u32) -> Self {
        SecurityContext {
            security_key,
            variant,
        }
    }

    /// Reads the game code and security key from the trainer info payload.
    pub fn from_trainer_info(payload: &[u8]) -> Result<Self> {
        let variant = GameVariant::from_code(fields::read_uint(payload, layout::GAME_CODE)?);
        let security_key = match variant.security_key() {
            Some(span) => fields::read_uint(payload, span)?,
            None => 0,
        };
        log::debug!("Detected {variant} save, security key 0x{security_key:08x}");
        Ok(SecurityContext::new(variant, security_key))
    }

    fn lower_key(&self) -> u16 {
        (self.security_key & 0xffff) as u16
    }

    pub fn decrypt_money(&self, stored: u32) -> u32 {
        stored ^ self.security_key
    }

    pub fn decrypt_coins(&self, stored: u16) -> u16 {
        stored ^ self.lower_key()
    }

    pub fn decrypt_quantity(&self, stored: u16) -> u16 {
        stored ^ self.lower_key()
    }

    pub fn encrypt_money(&self, value: u32) -> u32 {
        self.decrypt_money(value)
    }

    pub fn encrypt_coins(&self, value: u16) -> u16 {
        self.decrypt_coins(value)
    }

    pub fn encrypt_quantity(&self, value: u16) -> u16 {
        self.decrypt_quantity(value)
    }
}

/// Key for a single Pokemon record, derived from its own header.
pub fn pokemon_key(original_trainer_id: u32, personality_value: u32) -> u32 {
    original_trainer_id ^ personality_value
}

/// XORs the key over each little-endian word of the 48 byte data region.
pub fn decrypt_data(data: &[u8; ENCRYPTED_DATA_SIZE], key: u32) -> [u8; ENCRYPTED_DATA_SIZE] {
    let mut out = *data;
    for word in out.chunks_exact_mut(4) {
        let value = LittleEndian::read_u32(word) ^ key;
        LittleEndian::write_u32(word, value);
    }
    out
}

pub fn encrypt_data(data: &[u8; ENCRYPTED_DATA_SIZE], key: u32) -> [u8; ENCRYPTED_DATA_SIZE] {
    decrypt_data(data, key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_coins_and_quantities_round_trip() {
        for key in [0u32, 1, 0x1234, 0xdead_beef, u32::MAX] {
            let ctx = SecurityContext::new(GameVariant::Emerald, key);
            for value in [0u32, 1, 999_999, u32::MAX] {
                assert_eq!(ctx.decrypt_money(ctx.encrypt_money(value)), value);
            }
            for value in [0u16, 1, 99, 9999, u16::MAX] {
                assert_eq!(ctx.decrypt_coins(ctx.encrypt_coins(value)), value);
                assert_eq!(ctx.decrypt_quantity(ctx.encrypt_quantity(value)), value);
            }
        }
    }

    #[test]
    fn coins_use_lower_half_of_key() {
        let ctx = SecurityContext::new(GameVariant::FireRedLeafGreen, 0xabcd_0f0f);
        assert_eq!(ctx.decrypt_coins(0x0f0f), 0);
        assert_eq!(ctx.decrypt_money(0xabcd_0f0f), 0);
        assert_eq!(ctx.decrypt_quantity(0x0f0e), 1);
    }

    #[test]
    fn data_round_trips_and_keeps_word_order() {
        let mut plain = [0u8; ENCRYPTED_DATA_SIZE];
        plain.iter_mut().enumerate().for_each(|(idx, byte)| *byte = idx as u8);
        let key = pokemon_key(0x1122_3344, 0x0f0f_0f0f);
        assert_eq!(key, 0x1e2d_3c4b);

        let encrypted = encrypt_data(&plain, key);
        assert_ne!(encrypted, plain);
        assert_eq!(
            LittleEndian::read_u32(&encrypted[4..8]),
            LittleEndian::read_u32(&plain[4..8]) ^ key
        );
        assert_eq!(decrypt_data(&encrypted, key), plain);
    }

    #[test]
    fn ruby_sapphire_has_no_key() {
        let mut payload = vec![0u8; 0x0ff4];
        payload[0xac..0xb0].copy_from_slice(&0u32.to_le_bytes());
        payload[0x0f20..0x0f24].copy_from_slice(&0x5555_5555u32.to_le_bytes());
        let ctx = SecurityContext::from_trainer_info(&payload).unwrap();
        assert_eq!(ctx, SecurityContext::new(GameVariant::RubySapphire, 0));
    }

    #[test]
    fn firered_key_is_read_from_its_own_field() {
        let mut payload = vec![0u8; 0x0ff4];
        payload[0xac..0xb0].copy_from_slice(&1u32.to_le_bytes());
        payload[0x0f20..0x0f24].copy_from_slice(&0x5555_5555u32.to_le_bytes());
        let ctx = SecurityContext::from_trainer_info(&payload).unwrap();
        assert_eq!(ctx.variant, GameVariant::FireRedLeafGreen);
        assert_eq!(ctx.security_key, 0x5555_5555);
    }

    #[test]
    fn emerald_key_doubles_as_game_code() {
        let mut payload = vec![0u8; 0x0ff4];
        payload[0xac..0xb0].copy_from_slice(&0x1234u32.to_le_bytes());
        let ctx = SecurityContext::from_trainer_info(&payload).unwrap();
        assert_eq!(ctx, SecurityContext::new(GameVariant::Emerald, 0x1234));
    }
}
