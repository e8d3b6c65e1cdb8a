//! # Sample Data Flow Test Suite
//!
//! End-to-end tests over the public API: configuration files resolve
//! connection parameters, delimited sample-data files become `INSERT`
//! statements against a database collaborator, and query results render
//! as titled reports.
//!
//! ## Test Categories
//!
//! 1. **Configuration Flow**: file -> map -> connection parameters
//! 2. **Loading Flow**: delimited file -> insert statements -> collaborator
//! 3. **Report Flow**: query results -> aligned table -> titled report
//!
//! ## Usage
//!
//! ```sh
//! cargo test --test sample_data_flow -- --nocapture
//! ```

use std::fs;
use std::path::PathBuf;

use tempfile::tempdir;

use gledger::{
    load_delim_file, read_delim, report_from_query, Config, DbConnection, RecordSet, TextBuf,
};

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

fn write_file(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write test file");
    path
}

/// Collaborator double: records executed statements, answers queries from a
/// canned delimited snippet.
struct RecordingDb {
    executed: Vec<String>,
    result_rows: &'static str,
}

impl RecordingDb {
    fn new() -> RecordingDb {
        RecordingDb {
            executed: Vec::new(),
            result_rows: "ID:Name\n1:Bob\n22:Alice\n",
        }
    }
}

impl DbConnection for RecordingDb {
    fn execute(&mut self, query: &TextBuf) -> eyre::Result<()> {
        self.executed.push(query.to_string_lossy().into_owned());
        Ok(())
    }

    fn query(&mut self, _query: &TextBuf) -> eyre::Result<RecordSet> {
        Ok(read_delim(&mut self.result_rows.as_bytes(), b':')?)
    }
}

// ============================================================================
// CONFIGURATION FLOW
// ============================================================================

mod config_flow {
    use super::*;

    #[test]
    fn config_file_resolves_connection_parameters() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = write_file(
            &dir,
            "gledger.conf",
            "# gledger test configuration\n\
             hostname = localhost\n\
             \n\
             database = gl_test\n\
             username=gl_user\n",
        );

        let config = Config::load(&path).expect("Failed to load config");
        let params = config.connect_params().expect("Failed to resolve params");

        assert_eq!(params.hostname, "localhost");
        assert_eq!(params.database, "gl_test");
        assert_eq!(params.username, "gl_user");
        assert!(params.password.is_none());
    }

    #[test]
    fn malformed_config_reports_the_line() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = write_file(&dir, "bad.conf", "hostname = h\nbad line no equals\n");

        let err = Config::load(&path).unwrap_err();
        assert!(err.is_malformed());
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn missing_config_file_is_not_malformed() {
        let dir = tempdir().expect("Failed to create temp dir");
        let err = Config::load(dir.path().join("absent.conf")).unwrap_err();
        assert!(err.is_file_open());
        assert!(!err.is_malformed());
    }
}

// ============================================================================
// LOADING FLOW
// ============================================================================

mod loading_flow {
    use super::*;

    #[test]
    fn sample_file_loads_as_ordered_inserts() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = write_file(
            &dir,
            "users",
            "# sample users\n\
             ID:Username:Enabled\n\
             integer:string:boolean\n\
             1:jdoe:true\n\
             2:pnurfler:false\n",
        );

        let mut db = RecordingDb::new();
        let loaded = load_delim_file(&mut db, "users", &path, b':').expect("Failed to load");

        assert_eq!(loaded, 2);
        assert_eq!(
            db.executed,
            [
                "INSERT INTO users (ID,Username,Enabled) VALUES (1,'jdoe',true)",
                "INSERT INTO users (ID,Username,Enabled) VALUES (2,'pnurfler',false)",
            ]
        );
    }

    #[test]
    fn arity_mismatch_aborts_before_any_insert() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = write_file(&dir, "users", "ID:Name\n1:Bob\n2:Alice:extra\n");

        let mut db = RecordingDb::new();
        let err = load_delim_file(&mut db, "users", &path, b':').unwrap_err();

        assert!(err.to_string().contains(&path.display().to_string()));
        assert!(db.executed.is_empty());
    }

    #[test]
    fn comma_delimited_files_load_with_a_custom_delimiter() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = write_file(&dir, "entities.csv", "ID,Entity\n1,Head Office\n");

        let mut db = RecordingDb::new();
        let loaded = load_delim_file(&mut db, "entities", &path, b',').expect("Failed to load");

        assert_eq!(loaded, 1);
        assert_eq!(
            db.executed,
            ["INSERT INTO entities (ID,Entity) VALUES ('1','Head Office')"]
        );
    }
}

// ============================================================================
// REPORT FLOW
// ============================================================================

mod report_flow {
    use super::*;

    #[test]
    fn query_results_render_as_a_titled_report() {
        let mut db = RecordingDb::new();
        let query = TextBuf::from("SELECT id AS 'ID', name AS 'Name' FROM users ORDER BY id");

        let report = report_from_query(&mut db, "Users List", &query).expect("Failed to report");
        let rendered = report.render();
        let text = rendered.to_string_lossy();

        assert!(text.starts_with(
            "Users List\n\
             ==========\n\
             +----+-------+\n\
             | ID | Name  |\n\
             +----+-------+\n\
             | 1  | Bob   |\n\
             | 22 | Alice |\n\
             +----+-------+\n\
             Report created on "
        ));
        assert!(text.ends_with(" UTC.\n"));
    }

    #[test]
    fn rendered_tables_share_the_documented_widths() {
        let mut db = RecordingDb::new();
        let set = db
            .query(&TextBuf::from("SELECT 1"))
            .expect("Failed to query");

        let lines: Vec<String> = set
            .text_report()
            .to_string_lossy()
            .lines()
            .map(str::to_owned)
            .collect();
        assert_eq!(lines[0], "+----+-------+");
        assert_eq!(lines.last().unwrap(), "+----+-------+");
    }
}
