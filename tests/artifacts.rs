use otter_resolve::{
    config::{Config, LiteralOrder},
    context::Context,
    io::writer::refutation_string,
};

/// Reads, refutes, and writes a problem.
fn artifact(problem: &str, config: Config) -> String {
    let mut ctx = Context::from_config(config);
    let goal = match ctx.read_problem(problem.as_bytes()) {
        Ok(goal) => goal,
        Err(e) => panic!("{e:?}"),
    };
    let refutation = match ctx.refute(&goal) {
        Ok(refutation) => refutation,
        Err(e) => panic!("{e:?}"),
    };
    match refutation_string(&refutation, &ctx.atom_db) {
        Ok(text) => text,
        Err(e) => panic!("{e:?}"),
    }
}

fn preserved() -> Config {
    let mut config = Config::default();
    config.literal_order.value = LiteralOrder::Preserved;
    config
}

mod worked {
    use super::*;

    #[test]
    fn goal_in_knowledge_base() {
        assert_eq!(artifact("A\n1\nA\n", Config::default()), "1\n{}\nYES\n");
    }

    #[test]
    fn unrelated_goal() {
        assert_eq!(artifact("B\n1\nA\n", Config::default()), "0\nNO\n");
    }

    #[test]
    fn disjunctive_syllogism() {
        assert_eq!(
            artifact("B\n2\nA OR B\n-A\n", Config::default()),
            "2\nB\nA\n1\n{}\nYES\n"
        );
    }
}

mod traces {
    use super::*;

    #[test]
    fn chain() {
        let problem = "-A
4
-A OR B
-B OR C
-C
-A OR B OR -C
";
        let expected = "4
-A OR C
B
-B
B OR -C
4
-A
C
-A OR -C
{}
YES
";
        assert_eq!(artifact(problem, Config::default()), expected);
    }

    #[test]
    fn chain_with_disjunctive_goal() {
        let problem = "A OR -D
4
-A OR B
C OR -B
-C
-A OR B OR -C
";
        let expected = "2
-A OR C
-B
1
-A OR -C
1
-A OR -B
0
NO
";
        assert_eq!(artifact(problem, Config::default()), expected);
    }

    #[test]
    fn conjunctions_are_flattened() {
        let problem = "-A
3
A OR B AND -B OR C
-C
D
";
        assert_eq!(
            artifact(problem, Config::default()),
            "2\nA OR C\n-B\n0\nNO\n"
        );
    }

    #[test]
    fn conjunction_chain_with_unrelated_clause() {
        let problem = "D
3
A AND -A OR B AND -B OR C
-C OR D
E OR F
";
        let expected = "4
B
-B OR D
-C
-A OR C
5
C
-A OR D
-B
D
-A
1
{}
YES
";
        assert_eq!(artifact(problem, Config::default()), expected);
    }

    #[test]
    fn final_generation_is_complete() {
        let problem = "-P OR R
5
-P OR Q
-Q OR R
P OR S
-S OR T
-R OR -T
";
        let expected = "7
-P OR R
Q OR S
Q
-Q OR -T
-Q
P OR T
-R OR -S
15
-P OR -T
-P
Q OR T
R OR S
R
-Q OR -S
P OR -R
R OR T
-P OR -S
S OR -T
S
Q OR -R
-T
{}
P OR -Q
YES
";
        assert_eq!(artifact(problem, Config::default()), expected);
    }

    #[test]
    fn limits_do_not_change_a_trace() {
        let problem = "B\n2\nA OR B\n-A\n";
        let mut config = Config::default();
        config.generation_limit.value = 2;
        config.clause_limit.value = 5;
        config.workers.value = 3;
        assert_eq!(artifact(problem, config), "2\nB\nA\n1\n{}\nYES\n");
    }
}

mod literal_order {
    use super::*;

    const OUT_OF_ORDER: &str = "A
2
C OR A
-C OR B
";

    #[test]
    fn sorted() {
        assert_eq!(
            artifact(OUT_OF_ORDER, Config::default()),
            "2\nA OR B\nC\n1\nB\n0\nNO\n"
        );
    }

    #[test]
    fn preserved() {
        assert_eq!(
            artifact(OUT_OF_ORDER, super::preserved()),
            "2\nB OR A\nC\n1\nB\n0\nNO\n"
        );
    }

    #[test]
    fn preserved_agrees_on_sorted_input() {
        let problem = "-A
4
-A OR B
C OR -B
-C
-A OR B OR -C
";
        let sorted = problem.replace("C OR -B", "-B OR C");
        assert_eq!(
            artifact(problem, super::preserved()),
            artifact(&sorted, Config::default())
        );
    }
}

mod multi_character {
    use super::*;

    #[test]
    fn names() {
        let mut config = Config::default();
        config.multi_character_symbols.value = true;

        let problem = "wet
2
-rain OR wet
rain
";
        assert_eq!(artifact(problem, config), "2\nwet\n-rain\n1\n{}\nYES\n");
    }
}
