// src/report/mod.rs
use crate::checks::CheckResult;
use crate::config::Config;

const PASS_MARK: &str = "✓";
const FAIL_MARK: &str = "✗";
const BANNER_WIDTH: usize = 50;

/// One line per check: glyph plus the check's own message.
pub fn render_check_line(result: &CheckResult) -> String {
    let mark = if result.passed { PASS_MARK } else { FAIL_MARK };
    format!("{} {}", mark, result.message)
}

/// Process exit code for an ordered sequence of results: 0 iff
/// every check passed. Pure so it can be tested without capturing
/// stdout or spawning a process.
pub fn exit_code(results: &[CheckResult]) -> u8 {
    if results.iter().all(|r| r.passed) {
        0
    } else {
        1
    }
}

pub fn print_header(config: &Config) {
    let banner = "=".repeat(BANNER_WIDTH);
    println!("{}", banner);
    println!("Backend API Integration Test");
    println!("{}", banner);
    println!();
    println!("Testing API at: {}", config.base_url);
    println!();
}

pub fn print_summary(config: &Config, results: &[CheckResult]) {
    println!();
    println!("{}", "=".repeat(BANNER_WIDTH));
    if results.iter().all(|r| r.passed) {
        println!("{} All tests passed! Backend is ready.", PASS_MARK);
        println!();
        println!("Next steps:");
        println!("1. Start frontend: cd frontend && npm run dev");
        println!("2. Open browser: {}", config.origin);
    } else {
        println!("{} Some tests failed. Check backend server.", FAIL_MARK);
        println!();
        println!("Make sure backend is running:");
        println!("  cd backend");
        println!("  uvicorn api_ml:app --host 0.0.0.0 --port 8000 --reload");
    }
}
