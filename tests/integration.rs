use dex_router::{
    best_trade_exact_in, best_trade_exact_out, BestTradeOptions, FeeSchedule, Pair, Percent, Route,
    RouterConfig, RouterError, Token, TokenAmount, Trade, TradeType,
};
use num_bigint::BigUint;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const CHAIN_ID: u64 = 1;

fn token(index: u8) -> Token {
    let address = format!("0x{:040x}", u32::from(index) + 1);
    Token::new(CHAIN_ID, &address, 18, Some(&format!("t{index}"))).unwrap()
}

fn amount(index: u8, raw: u64) -> TokenAmount {
    TokenAmount::new(token(index), raw)
}

fn pair(token_a: u8, reserve_a: u64, token_b: u8, reserve_b: u64, fee: u32, protocol: u32) -> Pair {
    Pair::new(amount(token_a, reserve_a), amount(token_b, reserve_b), fee, protocol).unwrap()
}

fn percent(numerator: i64, denominator: i64) -> Percent {
    Percent::new(numerator, denominator).unwrap()
}

fn options(max_num_results: usize, max_hops: usize) -> BestTradeOptions {
    BestTradeOptions {
        max_num_results,
        max_hops,
    }
}

// A-B 1000/1000 no fee, A-C 1000/1100 at 15bps, B-C 1200/1000 no fee
fn triangle() -> Vec<Pair> {
    vec![
        pair(0, 1000, 1, 1000, 0, 0),
        pair(0, 1000, 2, 1100, 15, 5),
        pair(1, 1200, 2, 1000, 0, 5),
    ]
}

#[test]
fn best_exact_in_over_triangle() {
    let result =
        best_trade_exact_in(&triangle(), &amount(0, 100), &token(2), BestTradeOptions::default()).unwrap();

    assert_eq!(result.len(), 2);
    assert_eq!(result[0].route().pairs().len(), 1);
    assert_eq!(result[0].route().path(), &[token(0), token(2)]);
    assert_eq!(result[0].output_amount(), &amount(2, 99));
    assert_eq!(result[1].route().pairs().len(), 2);
    assert_eq!(result[1].route().path(), &[token(0), token(1), token(2)]);
    assert_eq!(result[1].output_amount(), &amount(2, 69));
}

#[test]
fn best_exact_out_over_triangle() {
    let result =
        best_trade_exact_out(&triangle(), &token(0), &amount(2, 100), BestTradeOptions::default()).unwrap();

    assert_eq!(result.len(), 2);
    assert_eq!(result[0].route().path(), &[token(0), token(2)]);
    assert_eq!(result[0].input_amount(), &amount(0, 101));
    assert_eq!(result[1].route().path(), &[token(0), token(1), token(2)]);
    assert_eq!(result[1].input_amount(), &amount(0, 155));
}

#[test]
fn search_errors_are_caller_errors_only() {
    assert_eq!(
        best_trade_exact_in(&[], &amount(0, 100), &token(2), BestTradeOptions::default()),
        Err(RouterError::Pairs)
    );
    assert_eq!(
        best_trade_exact_out(&triangle(), &token(0), &amount(2, 100), options(3, 0)),
        Err(RouterError::MaxHops)
    );

    // zero reserves on both legs never produce a candidate
    let empty = vec![pair(0, 0, 1, 0, 0, 0)];
    for raw in [1, 100, 1_000_000] {
        assert!(best_trade_exact_in(&empty, &amount(0, raw), &token(1), BestTradeOptions::default())
            .unwrap()
            .is_empty());
    }

    // more than all reachable liquidity
    assert!(
        best_trade_exact_out(&triangle(), &token(0), &amount(2, 5000), BestTradeOptions::default())
            .unwrap()
            .is_empty()
    );
}

#[test]
fn search_results_match_direct_trade_construction() {
    let pairs = triangle();
    for trade in best_trade_exact_in(&pairs, &amount(0, 250), &token(2), options(5, 3)).unwrap() {
        let rebuilt = Trade::new(trade.route().clone(), amount(0, 250), TradeType::ExactInput).unwrap();
        assert_eq!(rebuilt, trade);
    }
    for trade in best_trade_exact_out(&pairs, &token(0), &amount(2, 250), options(5, 3)).unwrap() {
        let rebuilt = Trade::new(trade.route().clone(), amount(2, 250), TradeType::ExactOutput).unwrap();
        assert_eq!(rebuilt, trade);
    }
}

#[test]
fn slippage_bounds_at_zero_are_exact() {
    let route = Route::new(triangle()[..1].to_vec(), token(0)).unwrap();
    let exact_in = Trade::exact_in(route.clone(), amount(0, 100)).unwrap();
    let exact_out = Trade::exact_out(route, amount(2, 100)).unwrap();

    assert_eq!(&exact_in.maximum_amount_in(&Percent::zero()).unwrap(), exact_in.input_amount());
    assert_eq!(&exact_in.minimum_amount_out(&Percent::zero()).unwrap(), exact_in.output_amount());
    assert_eq!(&exact_out.maximum_amount_in(&Percent::zero()).unwrap(), exact_out.input_amount());
    assert_eq!(&exact_out.minimum_amount_out(&Percent::zero()).unwrap(), exact_out.output_amount());

    for trade in [&exact_in, &exact_out] {
        assert_eq!(
            trade.maximum_amount_in(&percent(-1, 10_000)),
            Err(RouterError::SlippageTolerance)
        );
        assert_eq!(
            trade.minimum_amount_out(&percent(-1, 10_000)),
            Err(RouterError::SlippageTolerance)
        );
    }
}

#[test]
fn pools_with_different_fee_regimes_route_together() {
    let config = RouterConfig::default();
    let per_mille = FeeSchedule::new(3, 0).with_fee_denominator(1000);
    let pairs = vec![
        Pair::with_fees(amount(0, 50_000), amount(1, 50_000), config.fee_schedule()).unwrap(),
        Pair::with_fees(amount(1, 50_000), amount(2, 50_000), per_mille).unwrap(),
        Pair::with_fees(amount(0, 10_000), amount(2, 10_000), FeeSchedule::new(100, 0)).unwrap(),
    ];

    let result =
        best_trade_exact_in(&pairs, &amount(0, 1000), &token(2), config.best_trade_options()).unwrap();
    assert_eq!(result.len(), 2);
    // deeper two-hop liquidity beats the shallower 1% pool
    assert_eq!(result[0].route().hops(), 2);
    assert!(result[0].output_amount().raw() > result[1].output_amount().raw());
}

fn random_pair(rng: &mut StdRng, token_a: u8, token_b: u8) -> Pair {
    pair(
        token_a,
        rng.gen_range(1_000..10_000_000),
        token_b,
        rng.gen_range(1_000..10_000_000),
        rng.gen_range(0..100),
        rng.gen_range(0..10),
    )
}

#[test]
fn single_hop_round_trips_never_favor_the_trader() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..500 {
        let p = random_pair(&mut rng, 0, 1);
        let reserve_out = u64::try_from(p.reserve_of(&token(1)).unwrap().raw()).unwrap();

        // buying `wanted` with the quoted input always delivers at least `wanted`
        let wanted = amount(1, rng.gen_range(1..reserve_out));
        let needed = p.get_input_amount(&wanted).unwrap();
        let received = p.get_output_amount(&needed).unwrap();
        assert!(received.raw() >= wanted.raw());

        // quoting back the output of `sold` never asks for more than one unit above it
        let sold = amount(0, rng.gen_range(1..1_000_000));
        if let Ok(out) = p.get_output_amount(&sold) {
            let back = p.get_input_amount(&out).unwrap();
            assert!(back.raw() <= &(sold.raw() + BigUint::from(1u32)));
        }
    }
}

#[test]
fn exact_out_input_buys_at_least_the_requested_output() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let pairs = vec![
            random_pair(&mut rng, 0, 1),
            random_pair(&mut rng, 1, 2),
            random_pair(&mut rng, 2, 3),
        ];
        let route = Route::new(pairs, token(0)).unwrap();
        let wanted = amount(3, rng.gen_range(1..1000));

        let exact_out = match Trade::exact_out(route.clone(), wanted.clone()) {
            Ok(trade) => trade,
            Err(e) => {
                assert_eq!(e, RouterError::InsufficientLiquidity);
                continue;
            }
        };
        let exact_in = Trade::exact_in(route, exact_out.input_amount().clone()).unwrap();
        assert!(exact_in.output_amount().raw() >= wanted.raw());
    }
}

#[test]
fn trades_serialize_for_downstream_consumers() {
    let trade = best_trade_exact_in(&triangle(), &amount(0, 100), &token(2), options(1, 3))
        .unwrap()
        .remove(0);
    let json = serde_json::to_value(&trade).unwrap();
    assert_eq!(json["trade_type"], "ExactInput");
    assert_eq!(json["route"]["path"].as_array().unwrap().len(), 2);
}

#[test]
fn pairs_spanning_two_chains_are_rejected_up_front() {
    let remote = Token::new(5, &format!("0x{:040x}", 9), 18, Some("x")).unwrap();
    assert_eq!(
        Pair::new(amount(0, 1000), TokenAmount::new(remote.clone(), 1000u32), 0, 0),
        Err(RouterError::InvalidPair)
    );

    // a pool living entirely on another chain is simply unreachable
    let remote_pool = Pair::new(
        TokenAmount::new(Token::new(5, &format!("0x{:040x}", 1), 18, None).unwrap(), 1000u32),
        TokenAmount::new(remote, 1000u32),
        0,
        0,
    )
    .unwrap();
    let mut pairs = triangle();
    pairs.push(remote_pool);
    let result = best_trade_exact_in(&pairs, &amount(0, 100), &token(2), BestTradeOptions::default()).unwrap();
    assert_eq!(result.len(), 2);
}
