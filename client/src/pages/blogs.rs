//! Public listing of approved posts and the single-post view.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::use_params_map;

use crate::app::Services;
use crate::components::blog_card::BlogCard;
use crate::components::loader::Loader;
use crate::state::blogs::BlogState;
use crate::util::blog::unique_domains;

#[component]
pub fn BlogsPage() -> impl IntoView {
    let services = expect_context::<Services>();
    let blogs = expect_context::<RwSignal<BlogState>>();

    {
        let store = services.blogs.clone();
        Effect::new(move || {
            let store = store.clone();
            leptos::task::spawn_local(async move { store.fetch_approved_with_domains().await });
        });
    }

    let domains = move || blogs.with(|state| unique_domains(&state.approved));

    view! {
        <div class="blogs-page">
            <h1>"Latest posts"</h1>
            <ul class="blogs-page__domains">
                <For
                    each=domains
                    key=|domain| domain.clone()
                    children=move |domain| view! { <li class="domain-chip">{domain}</li> }
                />
            </ul>
            {move || {
                let state = blogs.get();
                if state.loading && state.approved.is_empty() {
                    view! { <Loader label="Loading blogs..."/> }.into_any()
                } else if state.approved.is_empty() {
                    view! { <p class="blogs-page__empty">"No posts published yet."</p> }.into_any()
                } else {
                    view! {
                        <div class="blogs-page__grid">
                            {state.approved.into_iter().map(|blog| view! { <BlogCard blog=blog/> }).collect_view()}
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

#[component]
pub fn BlogDetailPage() -> impl IntoView {
    let services = expect_context::<Services>();
    let blogs = expect_context::<RwSignal<BlogState>>();
    let params = use_params_map();
    let blog_id = move || params.with(|p| p.get("id").unwrap_or_default());

    {
        let store = services.blogs.clone();
        Effect::new(move || {
            let id = blog_id();
            if id.is_empty() {
                return;
            }
            let store = store.clone();
            leptos::task::spawn_local(async move { store.fetch_blog(&id).await });
        });
    }

    view! {
        <div class="blog-detail">
            <a class="blog-detail__back" href="/blogs">"Back to posts"</a>
            {move || {
                let state = blogs.get();
                match state.current {
                    Some(blog) if blog.id == blog_id() => {
                        let views = format!("{} views", blog.viewcount);
                        view! {
                            <article>
                                <h1>{blog.title}</h1>
                                <p class="blog-detail__meta">
                                    {blog.published_at.or(blog.createdat).unwrap_or_default()}
                                    " · "
                                    {views}
                                </p>
                                <div class="blog-detail__content">{blog.content}</div>
                            </article>
                        }
                            .into_any()
                    }
                    _ if state.loading => view! { <Loader label="Loading blog..."/> }.into_any(),
                    _ if !state.error.is_empty() => {
                        view! { <p class="blog-detail__error">{state.error}</p> }.into_any()
                    }
                    _ => view! { <p class="blog-detail__error">"Blog not found."</p> }.into_any(),
                }
            }}
        </div>
    }
}
