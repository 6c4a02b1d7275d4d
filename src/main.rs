fn main() {
    dipascii::cli::run();
}
