//! Property tests for remote path rendering.

use proptest::prelude::*;

use relink::RemotePath;

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9._ '$-]{1,12}").unwrap()
}

fn relative_suffix() -> impl Strategy<Value = String> {
    proptest::collection::vec(segment(), 1..=4).prop_map(|segments| segments.join("/"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Home-relative paths keep an unquoted `~/` so the remote
    /// shell expands it, and everything after it is quoted.
    #[test]
    fn property_tilde_stays_expandable(suffix in relative_suffix()) {
        let path = RemotePath::new(format!("~/{}", suffix));
        let shell = path.to_shell();

        prop_assert!(shell.starts_with("~/'"));
        prop_assert!(shell.ends_with('\''));
    }

    /// PROPERTY: scp destinations of home-relative paths are relative.
    #[test]
    fn property_scp_path_is_home_relative(suffix in relative_suffix()) {
        let path = RemotePath::new(format!("~/{}", suffix));
        let scp = path.to_scp();

        prop_assert!(!scp.starts_with('~'));
        prop_assert!(!scp.starts_with('/'));
    }

    /// PROPERTY: Rendering never panics on arbitrary input.
    #[test]
    fn property_render_never_panics(s in "(?s).{0,128}") {
        let path = RemotePath::new(s);
        let _ = path.to_shell();
        let _ = path.to_scp();
        let _ = path.join("x");
    }
}
