fn main() {
    backdate::app::cli::run();
}
