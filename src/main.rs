fn main() {
    plugdeps::cli::run();
}
