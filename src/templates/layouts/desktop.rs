use maud::{html, Markup, DOCTYPE};

const NAV_LINKS: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/browse", "Browse Food"),
    ("/create-listing", "Create Listing"),
];

pub fn desktop_layout(title: &str, active_path: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | PlateShare" }
                link rel="stylesheet" href="/static/main.css";
                script src="https://unpkg.com/htmx.org@1.9.12" defer {};
            }
            body {
                header class="site-header" {
                    a href="/" class="brand" {
                        svg
                            xmlns="http://www.w3.org/2000/svg"
                            width="28"
                            height="28"
                            viewBox="0 0 24 24"
                            fill="none"
                            stroke="currentColor"
                            stroke-width="2"
                            stroke-linecap="round"
                            stroke-linejoin="round"
                            class="icon"
                        {
                            path d="m16 2-2.3 2.3a3 3 0 0 0 0 4.2l1.8 1.8a3 3 0 0 0 4.2 0L22 8" {}
                            path d="M15 15 3.3 3.3a4.2 4.2 0 0 0 0 6l7.3 7.3c.7.7 2 .7 2.8 0L15 15Zm0 0 7 7" {}
                            path d="m2.1 21.8 6.4-6.3" {}
                            path d="m19 5-7 7" {}
                        }
                        span { "PlateShare" }
                    }
                    nav {
                        ul {
                            @for (href, label) in NAV_LINKS {
                                li {
                                    a href=(href) class=[(*href == active_path).then_some("active")] { (label) }
                                }
                            }
                        }
                    }
                }
                main class="container" {
                    (content)
                }
                footer class="site-footer" {
                    p { "PlateShare: less waste, more shared plates." }
                }
            }
        }
    }
}
