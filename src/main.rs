fn main() {
    healthdesk_lib::run()
}
