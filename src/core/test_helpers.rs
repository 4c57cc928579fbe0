use super::amount::TokenAmount;
use super::pair::Pair;
use super::token::Token;

pub const CHAIN_ID: u64 = 1;

/// Token `t{index}` at address 0x00..0{index + 1}
pub fn token(index: u8) -> Token {
    let address = format!("0x{:040x}", u32::from(index) + 1);
    Token::new(CHAIN_ID, &address, 18, Some(&format!("t{index}"))).unwrap()
}

pub fn amount(index: u8, raw: u64) -> TokenAmount {
    TokenAmount::new(token(index), raw)
}

pub fn pair(
    token_a: u8,
    reserve_a: u64,
    token_b: u8,
    reserve_b: u64,
    swap_fee: u32,
    protocol_fee_denominator: u32,
) -> Pair {
    Pair::new(
        amount(token_a, reserve_a),
        amount(token_b, reserve_b),
        swap_fee,
        protocol_fee_denominator,
    )
    .unwrap()
}

/// The reference graph: t0-t1 1000/1000 no fee, t0-t2 1000/1100 at 15bps,
/// t0-t3 1000/900 at 30bps, t1-t2 1200/1000 no fee, t1-t3 1200/1300 default fees
pub fn pair_0_1() -> Pair {
    pair(0, 1000, 1, 1000, 0, 0)
}

pub fn pair_0_2() -> Pair {
    pair(0, 1000, 2, 1100, 15, 5)
}

pub fn pair_0_3() -> Pair {
    pair(0, 1000, 3, 900, 30, 0)
}

pub fn pair_1_2() -> Pair {
    pair(1, 1200, 2, 1000, 0, 5)
}

pub fn pair_1_3() -> Pair {
    Pair::with_default_fees(amount(1, 1200), amount(3, 1300)).unwrap()
}

pub fn empty_pair_0_1() -> Pair {
    pair(0, 0, 1, 0, 0, 0)
}
