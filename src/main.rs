fn main() {
    stringchain::cli::run();
}
