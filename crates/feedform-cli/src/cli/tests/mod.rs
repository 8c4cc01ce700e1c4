use super::*;

fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

#[test]
fn cli_parse_keys() {
    match parse(&["feedform", "keys", "route.json", "--prefix", "github"]) {
        CliCommand::Keys { route } => {
            assert_eq!(route.route, "route.json");
            assert_eq!(route.prefix, "github");
            assert!(route.name.is_none());
        }
        _ => panic!("expected Keys"),
    }
}

#[test]
fn cli_parse_show_with_name() {
    match parse(&["feedform", "show", "-", "--prefix", "github", "--name", "GitHub"]) {
        CliCommand::Show { route } => {
            assert_eq!(route.route, "-");
            assert_eq!(route.name.as_deref(), Some("GitHub"));
        }
        _ => panic!("expected Show"),
    }
}

#[test]
fn cli_parse_build_values() {
    match parse(&[
        "feedform",
        "build",
        "r.json",
        "--prefix",
        "github",
        "--set",
        "user=DIYgod",
        "--set",
        "route-params-lang=en",
    ]) {
        CliCommand::Build { route, values } => {
            assert_eq!(route.prefix, "github");
            assert_eq!(
                values,
                vec![
                    ("user".to_string(), "DIYgod".to_string()),
                    ("route-params-lang".to_string(), "en".to_string()),
                ]
            );
        }
        _ => panic!("expected Build"),
    }
}

#[test]
fn cli_parse_fetch_instance() {
    match parse(&[
        "feedform",
        "fetch",
        "r.json",
        "--prefix",
        "github",
        "--instance",
        "http://localhost:1200",
    ]) {
        CliCommand::Fetch {
            values, instance, ..
        } => {
            assert!(values.is_empty());
            assert_eq!(instance.as_deref(), Some("http://localhost:1200"));
        }
        _ => panic!("expected Fetch"),
    }
}

#[test]
fn cli_requires_prefix() {
    assert!(Cli::try_parse_from(["feedform", "keys", "r.json"]).is_err());
}

#[test]
fn cli_rejects_bad_assignment() {
    assert!(Cli::try_parse_from(["feedform", "build", "r.json", "--prefix", "p", "--set", "oops"]).is_err());
}
