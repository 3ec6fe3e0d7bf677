fn main() {
    // Feed build date and footer year
    let build_time = chrono::Utc::now().to_rfc3339();
    println!("cargo:rustc-env=BUILD_TIME={}", build_time);

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=PORTFOLIO_BASE_PATH");
    println!("cargo:rerun-if-env-changed=PORTFOLIO_SITE_URL");
}
