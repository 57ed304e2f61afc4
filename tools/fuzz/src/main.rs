use afl::fuzz;
use pl_validate::{
    car_reg, pesel, postal_code, region, region_full, ControlNumber, PeselValidation,
    PolishValidator, Validator,
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use strum::IntoEnumIterator;

#[cfg(not(feature = "manual_test"))]
fn main() {
    fuzz!(|data: &[u8]| {
        run_raw_fuzz(data);
    });
}

#[cfg(feature = "manual_test")]
fn main() {
    use std::io::{stdin, Read};

    let mut input = vec![];
    if stdin().read_to_end(&mut input).is_ok() {
        run_raw_fuzz(&input);
    }
}

fn split_bytes_once(input: &[u8]) -> Option<(&[u8], &[u8])> {
    let i = input.iter().position(|b| *b == b',')?;
    Some((&input[0..i], &input[i + 1..]))
}

fn run_raw_fuzz(bytes: &[u8]) -> Option<()> {
    let (input, rand_seed) = split_bytes_once(bytes)?;
    let input_str = std::str::from_utf8(input).ok()?;

    let mut rng_seed: u64 = 0;
    for byte in rand_seed.iter().take(8) {
        rng_seed <<= 8;
        rng_seed += *byte as u64;
    }

    let rng = StdRng::seed_from_u64(rng_seed);
    run_fuzz(input_str, rng);

    Some(())
}

fn gen_weights(rng: &mut StdRng) -> Vec<u32> {
    let len = rng.gen_range(0..16);
    (0..len).map(|_| rng.gen_range(0..12)).collect()
}

fn run_fuzz(input: &str, mut rng: StdRng) {
    #[cfg(feature = "manual_test")]
    {
        println!("Input: {:?}", input);
        println!("Input len: {:?}", input.len());
    }

    // none of these may panic, whatever the input
    for validator in PolishValidator::iter() {
        validator.is_valid(input);
    }
    region(input);
    region_full(input);
    car_reg(input);
    postal_code(input, rng.gen_bool(0.5));

    // a decoded record only exists for a valid number
    if let PeselValidation::Valid(record) = pesel(input) {
        assert!(record.date.month < 20);
        assert!(record.date.day < 100);
        assert!((1800..2300).contains(&record.date.year));
    }

    let weights = gen_weights(&mut rng);
    let modulus = rng.gen_range(0..20);
    let mut scheme = ControlNumber::new(&weights, modulus);
    if rng.gen_bool(0.5) {
        scheme = scheme.subtract(rng.gen_range(0..12));
    }
    if rng.gen_bool(0.5) {
        scheme = scheme.ten_equals_zero();
    }
    let is_valid = scheme.is_valid(input);
    if is_valid {
        assert_eq!(input.len(), scheme.digit_count());
    }
    if let Some(number) = input.get(..weights.len()).and_then(|body| scheme.complete(body)) {
        assert!(scheme.is_valid(&number));
    }

    #[cfg(feature = "manual_test")]
    {
        println!("Weights: {:?}, modulus: {}", weights, modulus);
        println!("Valid for scheme: {:?}", is_valid);
    }
}
