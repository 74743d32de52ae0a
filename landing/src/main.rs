// HMSync landing page, Leptos 0.8 CSR

mod browser;
mod sections;

use hmsync::notify::ToastQueue;
use hmsync::scroll::HeroParallax;
use leptos::prelude::*;
use sections::*;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    let toasts = RwSignal::new(ToastQueue::new(browser::now()));
    let progress = browser::use_scroll_progress();
    let parallax = HeroParallax::default();
    let styles = Memo::new(move |_| parallax.styles(progress.get()));

    browser::set_scroll_behavior("smooth");
    on_cleanup(|| browser::set_scroll_behavior("auto"));

    view! {
        <ConsoleBanner />
        <Toaster toasts=toasts />
        <div class="theme-toggle-slot">
            <ThemeToggle />
        </div>
        <main class="page">
            <Hero styles=styles />
            <ProblemSolution />
            <Features />
            <WhyChoose styles=styles />
            <ContactSection toasts=toasts />
        </main>
        <Footer />
    }
}
