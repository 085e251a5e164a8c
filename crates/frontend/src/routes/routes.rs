use crate::layout::center::tabs::Tabs;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::sidebar::Sidebar;
use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;
use crate::system::pages::signup::SignupPage;
use leptos::prelude::*;

/// Screens shown before sign-in
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AuthScreen {
    SignIn,
    SignUp,
}

#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Restores `?active=` or opens the overview; runs once per sign-in
    tabs_store.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <Tabs /> }.into_any()
        />
    }
}

#[component]
fn AuthScreens() -> impl IntoView {
    let (screen, set_screen) = signal(AuthScreen::SignIn);

    move || match screen.get() {
        AuthScreen::SignIn => view! {
            <LoginPage on_sign_up=Callback::new(move |_| set_screen.set(AuthScreen::SignUp)) />
        }
        .into_any(),
        AuthScreen::SignUp => view! {
            <SignupPage on_sign_in=Callback::new(move |_| set_screen.set(AuthScreen::SignIn)) />
        }
        .into_any(),
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().is_authenticated()
            fallback=|| view! { <AuthScreens /> }
        >
            <MainLayout />
        </Show>
    }
}
