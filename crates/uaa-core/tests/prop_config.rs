use proptest::prelude::*;
use std::collections::HashSet;
use uaa_core::{context_name, read_config, write_config, Config, Context, Target, Token};

#[derive(Debug, Clone)]
enum Op {
    Target { base_url: String, skip_ssl: bool },
    Context { client_id: String, grant_type: String, username: String, token: String },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        ("https://[a-z]{1,8}\\.example\\.com", any::<bool>())
            .prop_map(|(base_url, skip_ssl)| Op::Target { base_url, skip_ssl }),
        (
            "[a-z0-9_:]{1,8}",
            prop_oneof![Just("client_credentials"), Just("password")],
            "[a-z ]{0,6}",
            "[A-Za-z0-9]{4,16}",
        )
            .prop_map(|(client_id, grant_type, username, token)| Op::Context {
                client_id,
                grant_type: grant_type.to_string(),
                username,
                token,
            }),
    ]
}

fn apply(ops: &[Op]) -> Config {
    let mut config = Config::new();
    for op in ops {
        match op.clone() {
            Op::Target { base_url, skip_ssl } => config.add_target(Target::new(base_url, skip_ssl)),
            Op::Context {
                client_id,
                grant_type,
                username,
                token,
            } => config.add_context(Context::new(
                client_id,
                grant_type,
                username,
                Token::bearer(token),
            )),
        }
    }
    config
}

proptest! {
    #[test]
    fn persisted_config_reads_back_identically(ops in proptest::collection::vec(op_strategy(), 0..12)) {
        let config = apply(&ops);
        prop_assert!(config.check_invariants().is_ok());

        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(".uaa").join("config.json");
        write_config(&config, &path).expect("write");
        let loaded = read_config(&path).expect("read");
        prop_assert_eq!(loaded, config);
    }

    #[test]
    fn distinct_triples_have_distinct_names(
        triples in proptest::collection::hash_set(("[a-z: %]{0,4}", "[a-z: %]{0,4}", "[a-z: %]{0,4}"), 1..16)
    ) {
        let names: HashSet<String> = triples
            .iter()
            .map(|(client_id, grant_type, username)| context_name(client_id, grant_type, username))
            .collect();
        prop_assert_eq!(names.len(), triples.len());
    }
}
