use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    locale_vetting::example_apps::run_page_dump(std::env::args().skip(1))
}
