mod cli {
    #![allow(non_snake_case)]

    use assert_cmd::prelude::*;
    use mockito::{Matcher, Server, ServerGuard};
    use predicates::prelude::*;
    use predicates::str::contains;

    use std::process::Command;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    const NAME: &str = "archive";

    /// `archive` pointed at `server` as archive service, without config file or browser
    fn archive_cmd(server: &ServerGuard) -> Result<Command, Box<dyn std::error::Error>> {
        let mut cmd = Command::cargo_bin(NAME)?;
        cmd.arg("--no-config")
            .arg("--no-browser")
            .arg("--archive-url")
            .arg(server.url());
        Ok(cmd)
    }

    #[test]
    fn test_output__when_no_url_provided() -> TestResult {
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.assert().failure().stderr(contains(
            "error: the following required arguments were not provided:\n  <URL>",
        ));
        Ok(())
    }

    #[test]
    fn test_output__version() -> TestResult {
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.arg("-v");

        cmd.assert()
            .success()
            .stdout(contains(concat!("archive ", env!("CARGO_PKG_VERSION"))));
        Ok(())
    }

    #[test]
    fn test_output__when_invalid_url() -> TestResult {
        let mut server = Server::new();
        let probe = server.mock("HEAD", Matcher::Any).expect(0).create();
        let mut cmd = archive_cmd(&server)?;

        cmd.arg("not_a_url");

        cmd.assert()
            .code(2)
            .stderr(contains("Error: Invalid URL format - Invalid URL format"));
        probe.assert();
        Ok(())
    }

    #[test]
    fn test_output__when_scheme_not_allowed() -> TestResult {
        let server = Server::new();
        let mut cmd = archive_cmd(&server)?;

        cmd.arg("ftp://example.com");

        cmd.assert()
            .code(2)
            .stderr(contains("URL must start with http:// or https://"));
        Ok(())
    }

    #[test]
    fn test_output__when_domain_blocked() -> TestResult {
        let server = Server::new();
        let mut cmd = archive_cmd(&server)?;

        cmd.arg("https://www.facebook.com/x");

        cmd.assert().code(2).stderr(contains("Domain is blocked"));
        Ok(())
    }

    #[test]
    fn test_output__when_domain_blocked_by_flag() -> TestResult {
        let mut server = Server::new();
        let probe = server.mock("HEAD", Matcher::Any).expect(0).create();
        let mut cmd = archive_cmd(&server)?;

        cmd.arg("--block").arg("127.0.0.1").arg(server.url() + "/page");

        cmd.assert().code(2).stderr(contains("Domain is blocked"));
        probe.assert();
        Ok(())
    }

    #[test]
    fn test_output__when_url_unreachable() -> TestResult {
        let mut server = Server::new();
        let _probe = server.mock("HEAD", "/missing").with_status(404).create();
        let lookup = server
            .mock("GET", "/submit/")
            .match_query(Matcher::Any)
            .expect(0)
            .create();
        let mut cmd = archive_cmd(&server)?;

        cmd.arg(server.url() + "/missing");

        cmd.assert()
            .code(3)
            .stderr(contains("Error: Could not reach URL - Page not found"));
        lookup.assert();
        Ok(())
    }

    #[test]
    fn test_output__when_archive_found() -> TestResult {
        let mut server = Server::new();
        let target = server.url() + "/page";
        let _probe = server.mock("HEAD", "/page").with_status(200).create();
        let lookup = server
            .mock("GET", "/submit/")
            .match_query(Matcher::UrlEncoded("url".into(), target.clone()))
            .with_status(302)
            .with_header("location", "/abc123")
            .create();
        let _snapshot = server.mock("GET", "/abc123").with_status(200).create();
        let mut cmd = archive_cmd(&server)?;

        cmd.arg("-q").arg(&target);

        cmd.assert()
            .success()
            .stdout(format!("{}/abc123\n", server.url()));
        lookup.assert();
        Ok(())
    }

    #[test]
    fn test_output__when_no_archive_found() -> TestResult {
        let mut server = Server::new();
        let _probe = server.mock("HEAD", "/page").with_status(200).create();
        let _lookup = server
            .mock("GET", "/submit/")
            .match_query(Matcher::Any)
            .with_status(200)
            .create();
        let mut cmd = archive_cmd(&server)?;

        cmd.arg(server.url() + "/page");

        cmd.assert()
            .code(4)
            .stderr(contains("Error: No archived version found for"))
            .stderr(contains("Tip: You can try again later"));
        Ok(())
    }

    #[test]
    fn test_output__when_service_unavailable() -> TestResult {
        let mut server = Server::new();
        let _probe = server.mock("HEAD", "/page").with_status(200).create();
        let _lookup = server
            .mock("GET", "/submit/")
            .match_query(Matcher::Any)
            .with_status(503)
            .create();
        let mut cmd = archive_cmd(&server)?;

        cmd.arg(server.url() + "/page");

        cmd.assert()
            .code(5)
            .stderr(contains("Error: Archive.is service unavailable"));
        Ok(())
    }

    #[test]
    fn test_output__when_create_requested_without_archive() -> TestResult {
        let mut server = Server::new();
        let _probe = server.mock("HEAD", "/page").with_status(200).create();
        let _lookup = server
            .mock("GET", "/submit/")
            .match_query(Matcher::Any)
            .with_status(404)
            .create();
        let mut cmd = archive_cmd(&server)?;

        cmd.arg("--create").arg(server.url() + "/page");

        cmd.assert()
            .code(6)
            .stderr(contains("Error: Could not create archive"));
        Ok(())
    }

    #[test]
    fn test_output__when_unexpected_archive_response() -> TestResult {
        let mut server = Server::new();
        let _probe = server.mock("HEAD", "/page").with_status(200).create();
        let _lookup = server
            .mock("GET", "/submit/")
            .match_query(Matcher::Any)
            .with_status(403)
            .create();
        let mut cmd = archive_cmd(&server)?;

        cmd.arg(server.url() + "/page");

        cmd.assert()
            .code(7)
            .stderr(contains("Error: Archive service error"))
            .stderr(contains("status code: 403"));
        Ok(())
    }

    #[test]
    fn test_output__when_zero_timeout() -> TestResult {
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.arg("--no-config")
            .arg("--timeout")
            .arg("0")
            .arg("https://example.com");

        cmd.assert()
            .code(9)
            .stderr(contains("Error: Configuration error"));
        Ok(())
    }

    #[test]
    fn test_output__when_blocklist_file_missing() -> TestResult {
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.arg("--no-config")
            .arg("--blocklist")
            .arg("nonexistent.json")
            .arg("https://example.com");

        cmd.assert()
            .code(9)
            .stderr(contains("Failed to load configuration"));
        Ok(())
    }

    #[test]
    fn test_output__when_unblocking_unknown_domain() -> TestResult {
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.arg("--no-config")
            .arg("--unblock")
            .arg("nonexistent.com")
            .arg("--list-blocked");

        cmd.assert()
            .code(9)
            .stderr(contains("Domain nonexistent.com is not in the blocked list"));
        Ok(())
    }

    #[test]
    fn test_output__list_blocked() -> TestResult {
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.arg("--no-config")
            .arg("--block")
            .arg("Example.org")
            .arg("--unblock")
            .arg("twitter.com")
            .arg("--list-blocked");

        cmd.assert()
            .success()
            .stdout(contains("facebook.com\n"))
            .stdout(contains("example.org\n"))
            .stdout(contains("twitter.com").not());
        Ok(())
    }

    #[test]
    fn test_output__save_then_load_blocklist() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("blocklist.json");

        let mut save = Command::cargo_bin(NAME)?;
        save.arg("--no-config")
            .arg("--block")
            .arg("saved-domain.com")
            .arg("--save-blocklist")
            .arg(&path);
        save.assert()
            .success()
            .stdout(contains("Saved 7 blocked domain(s)"));

        let mut load = Command::cargo_bin(NAME)?;
        load.arg("--no-config")
            .arg("--blocklist")
            .arg(&path)
            .arg("--list-blocked");
        load.assert()
            .success()
            .stdout(contains("saved-domain.com\n"));
        Ok(())
    }

    #[test]
    fn test_output__completions() -> TestResult {
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.arg("--completions").arg("bash");

        cmd.assert().success().stdout(contains("archive"));
        Ok(())
    }
}
