//! End-to-end pipeline tests over a temp CSV.

use std::fs;
use std::io::Write;

use jobs_cli::cli::CleanArgs;
use jobs_cli::pipeline::run_clean;
use tempfile::TempDir;

const RAW_CSV: &str = "\
index,Job Title,Salary Estimate,Job Description,Rating,Company Name,Location,Headquarters,Size,Founded,Type of ownership,Industry,Sector,Revenue,Competitors
0,Data Scientist,$53K-$91K (Glassdoor est.),long description,3.8,\"Tecolote Research\n3.8\",\"Albuquerque, NM\",\"Goleta, CA\",501 to 1000 employees,1973,Company - Private,Aerospace & Defense,Aerospace & Defense,$50 to $100 million (USD),-1
1,Data Analyst,Employer Provided Salary,long description,-1,NoSalary Corp,Remote,-1,-1,-1,-1,-1,-1,Unknown / Non-Applicable,\"A, B, C\"
";

fn write_input(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("Uncleaned_DS_Jobs.csv");
    let mut file = fs::File::create(&path).expect("create input");
    file.write_all(RAW_CSV.as_bytes()).expect("write input");
    path
}

fn args(dir: &TempDir, dry_run: bool) -> CleanArgs {
    CleanArgs {
        input: write_input(dir),
        output_dir: Some(dir.path().join("output")),
        config: None,
        strict_columns: false,
        dry_run,
    }
}

#[test]
fn full_pipeline_splits_valid_and_invalid_rows() {
    let dir = TempDir::new().expect("temp dir");
    let outcome = run_clean(&args(&dir, true)).expect("pipeline");

    assert_eq!(outcome.rows_read, 2);
    assert_eq!(outcome.people.len(), 1);
    assert_eq!(outcome.reports.len(), 1);

    let person = &outcome.people[0];
    assert_eq!(person.job_title, "Data Scientist");
    assert_eq!(person.salary_min, 53_000.0);
    assert_eq!(person.salary_max, 91_000.0);
    assert_eq!(person.location_city, "Albuquerque");
    assert_eq!(person.location_state.as_deref(), Some("NM"));
    assert_eq!(person.headquarters_city.as_deref(), Some("Goleta"));
    // Newline-embedded rating stripped from the company cell.
    assert_eq!(person.company_name.as_deref(), Some("Tecolote Research"));
    assert_eq!(person.rating, Some(3.8));
    assert_eq!(person.founded, Some(1973));
    assert_eq!(person.min_revenue, Some(50_000_000.0));
    assert_eq!(person.max_revenue, Some(100_000_000.0));
    // The "-1" competitors sentinel became missing, not a count of one.
    assert_eq!(person.num_competitors, None);

    // The salary-less row fails on both required salary bounds.
    let report = &outcome.reports[0];
    assert_eq!(report.row_id, 1);
    let fields: Vec<&str> = report.fields().collect();
    assert!(fields.contains(&"salary_min"));
    assert!(fields.contains(&"salary_max"));
}

#[test]
fn outputs_are_written_unless_dry_run() {
    let dir = TempDir::new().expect("temp dir");

    let dry = run_clean(&args(&dir, true)).expect("dry run");
    assert!(dry.output_csv.is_none());
    assert!(!dir.path().join("output").join("clean_jobs.csv").exists());

    let wet = run_clean(&args(&dir, false)).expect("pipeline");
    let csv_path = wet.output_csv.expect("csv path");
    let report_path = wet.output_report.expect("report path");

    let csv_text = fs::read_to_string(&csv_path).expect("read csv");
    assert!(csv_text.contains("Data Scientist"));
    assert!(csv_text.contains("53000"));

    let report_text = fs::read_to_string(&report_path).expect("read report");
    assert!(report_text.contains("salary_min"));
    assert!(report_text.contains("required field is missing"));
}

#[test]
fn missing_expected_column_is_a_hard_error() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("wrong.csv");
    fs::write(&path, "a,b\n1,2\n").expect("write csv");

    let args = CleanArgs {
        input: path,
        output_dir: None,
        config: None,
        strict_columns: false,
        dry_run: true,
    };
    // The extraction steps name columns this file does not have.
    assert!(run_clean(&args).is_err());
}
