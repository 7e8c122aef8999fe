use std::{fs::File, io::BufReader, path::PathBuf};

use otter_resolve::{
    context::Context,
    structures::clause::Clause,
    types::err::{self},
};

pub fn load_problem(context: &mut Context, path: &PathBuf) -> Result<Clause, err::ErrorKind> {
    let file = match File::open(path) {
        Err(_) => {
            let e = err::ParseError::Open(path.display().to_string());
            return Err(err::ErrorKind::from(e));
        }
        Ok(f) => f,
    };

    context.read_problem(BufReader::new(&file))
}

pub fn display_stats(context: &Context, refutation: &otter_resolve::reports::trace::Refutation) {
    let counters = &refutation.counters;
    println!("c Knowledge base clauses: {}", context.knowledge_base().len());
    println!("c Generations:            {}", counters.generations);
    println!("c Resolution attempts:    {}", counters.resolution_attempts);
    println!("c Resolvents:             {}", counters.resolvents);
    println!("c Accepted clauses:       {}", counters.accepted);
    println!("c Time:                   {:.2?}", counters.time);
}
