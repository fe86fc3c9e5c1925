fn main() {
    cymig::app::cli::run();
}
