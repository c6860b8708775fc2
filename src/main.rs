fn main() {
    quickaid_volunteer::run();
}
