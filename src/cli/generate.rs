use anyhow::Result;

use raiz::generate_cpfs;

pub fn run_generate(count: usize, masked: bool) -> Result<()> {
    for cpf in generate_cpfs(count) {
        if masked {
            println!("{cpf}");
        } else {
            println!("{}", cpf.digits());
        }
    }
    Ok(())
}

pub fn run_format(candidate: &str) -> Result<()> {
    println!("{}", raiz::mask_cpf(candidate));
    Ok(())
}
