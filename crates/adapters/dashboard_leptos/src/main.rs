fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(mikrodash_dashboard_leptos::App);
}
