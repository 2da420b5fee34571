use rand::Rng;

use crate::domain::Cpf;

/// Draw a random valid CPF from `rng`.
///
/// Bases whose completed form would repeat a single digit are redrawn.
pub fn generate_cpf<R: Rng>(rng: &mut R) -> Cpf {
    loop {
        let base: [u8; 9] = std::array::from_fn(|_| rng.gen_range(0..10));
        if let Some(cpf) = Cpf::from_base(base) {
            return cpf;
        }
    }
}

/// `count` random valid CPFs from the thread RNG.
#[must_use]
pub fn generate_cpfs(count: usize) -> Vec<Cpf> {
    let mut rng = rand::thread_rng();
    (0..count).map(|_| generate_cpf(&mut rng)).collect()
}
