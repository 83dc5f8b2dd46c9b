//! HTML templates for the dashboard.
//!
//! Uses a simple template approach with Tailwind CSS, HTMX and Alpine.js.

use fileflow_table::render::html_escape;

/// One sidebar entry.
struct NavItem {
    href: &'static str,
    icon: &'static str,
    label: &'static str,
}

/// Sidebar sections: an optional heading followed by its entries.
const NAV: &[(Option<&str>, &[NavItem])] = &[
    (
        None,
        &[
            NavItem {
                href: "/",
                icon: "gauge",
                label: "Dashboard",
            },
            NavItem {
                href: "/file-manager",
                icon: "folder",
                label: "File Manager",
            },
        ],
    ),
    (
        Some("User Management"),
        &[
            NavItem {
                href: "/user-management/users",
                icon: "user",
                label: "Users",
            },
            NavItem {
                href: "/user-management/roles",
                icon: "shield-halved",
                label: "Roles",
            },
            NavItem {
                href: "/user-management/departments",
                icon: "building",
                label: "Departments",
            },
        ],
    ),
    (
        Some("Template Management"),
        &[
            NavItem {
                href: "/template-management/master-templates",
                icon: "file-lines",
                label: "Master Templates",
            },
            NavItem {
                href: "/template-management/documents",
                icon: "copy",
                label: "List of Documents",
            },
            NavItem {
                href: "/template-management/approval-list",
                icon: "circle-check",
                label: "Approval List",
            },
        ],
    ),
];

/// Base HTML layout wrapper. `active` is the path of the current page.
pub fn layout(title: &str, active: &str, content: &str) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en" x-data="{{
    darkMode: localStorage.getItem('darkMode') === 'true',
    sidebarOpen: true
}}" :class="{{ 'dark': darkMode }}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} - FileFlow</title>
    <script src="https://cdn.tailwindcss.com"></script>
    <script>
        tailwind.config = {{
            darkMode: 'class',
            theme: {{
                extend: {{
                    colors: {{
                        primary: {{
                            50: '#eff6ff',
                            100: '#dbeafe',
                            200: '#bfdbfe',
                            300: '#93c5fd',
                            400: '#60a5fa',
                            500: '#3b82f6',
                            600: '#2563eb',
                            700: '#1d4ed8',
                            800: '#1e40af',
                            900: '#1e3a8a',
                        }}
                    }}
                }}
            }}
        }}
    </script>
    <script src="https://unpkg.com/htmx.org@1.9.10"></script>
    <script defer src="https://unpkg.com/alpinejs@3.x.x/dist/cdn.min.js"></script>
    <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css">
    <style>
        [x-cloak] {{ display: none !important; }}
    </style>
</head>
<body class="bg-gray-50 dark:bg-gray-900 min-h-screen">
    {NAV}

    <div class="flex">
        {SIDEBAR}

        <main class="flex-1 p-6 lg:p-8">
            <div class="max-w-7xl mx-auto">
                {content}
            </div>
        </main>
    </div>

    {TOAST}

    <script>
        document.body.addEventListener('htmx:afterSwap', function(evt) {{
            if (typeof Alpine !== 'undefined') {{
                Alpine.initTree(evt.detail.target);
            }}
        }});

        function showToast(message, type = 'success') {{
            const toast = document.getElementById('toast');
            const toastMessage = document.getElementById('toast-message');
            toastMessage.textContent = message;
            toast.className = toast.className.replace(/bg-\w+-500/, type === 'error' ? 'bg-red-500' : 'bg-green-500');
            toast.classList.remove('hidden');
            setTimeout(() => toast.classList.add('hidden'), 3000);
        }}
    </script>
</body>
</html>"##,
        title = html_escape(title),
        NAV = nav_template(),
        SIDEBAR = sidebar_template(active),
        TOAST = toast_template(),
    )
}

fn nav_template() -> &'static str {
    r##"<nav class="bg-primary-600 dark:bg-primary-900 text-white px-4 py-3 sticky top-0 z-50 shadow-lg">
        <div class="flex items-center justify-between">
            <div class="flex items-center gap-4">
                <button @click="sidebarOpen = !sidebarOpen" class="p-2 hover:bg-primary-700 rounded-lg">
                    <i class="fas fa-bars"></i>
                </button>
                <a href="/" class="flex items-center gap-2 font-semibold text-lg">
                    <i class="fas fa-water"></i>
                    <span>FileFlow</span>
                </a>
            </div>
            <div class="flex items-center gap-2">
                <button @click="darkMode = !darkMode; localStorage.setItem('darkMode', darkMode)"
                        class="p-2 hover:bg-primary-700 rounded-lg" aria-label="Toggle theme">
                    <i class="fas" :class="darkMode ? 'fa-sun' : 'fa-moon'"></i>
                </button>
                <a href="/logout" class="flex items-center gap-2 px-3 py-2 hover:bg-primary-700 rounded-lg text-sm">
                    <i class="fas fa-right-from-bracket"></i>
                    <span class="hidden sm:inline">Sign out</span>
                </a>
            </div>
        </div>
    </nav>"##
}

fn sidebar_template(active: &str) -> String {
    let sections: String = NAV
        .iter()
        .map(|(heading, items)| {
            let heading = heading
                .map(|h| {
                    format!(
                        r#"<div class="pt-4 pb-2 px-4 text-xs font-semibold text-gray-400 dark:text-gray-500 uppercase tracking-wider">{h}</div>"#
                    )
                })
                .unwrap_or_default();
            let links: String = items
                .iter()
                .map(|item| {
                    let state = if item.href == active {
                        "bg-primary-50 dark:bg-primary-900/50 text-primary-600 dark:text-primary-400"
                    } else {
                        "text-gray-700 dark:text-gray-200"
                    };
                    format!(
                        r##"<a href="{href}" class="flex items-center gap-3 px-4 py-3 {state} hover:bg-primary-50 dark:hover:bg-primary-900/50 rounded-lg transition-colors">
                    <i class="fas fa-{icon} w-5"></i>
                    <span>{label}</span>
                </a>"##,
                        href = item.href,
                        icon = item.icon,
                        label = item.label,
                    )
                })
                .collect();
            format!("{heading}{links}")
        })
        .collect();

    format!(
        r##"<aside class="w-64 bg-white dark:bg-gray-800 border-r border-gray-200 dark:border-gray-700 min-h-[calc(100vh-56px)] transition-all duration-300"
              :class="{{ '-ml-64': !sidebarOpen }}"
              x-cloak>
            <nav class="p-4 space-y-1">
                {sections}
            </nav>
        </aside>"##
    )
}

fn toast_template() -> &'static str {
    r##"<div id="toast" class="hidden fixed bottom-4 right-4 bg-green-500 text-white px-6 py-3 rounded-lg shadow-lg z-50 transition-all">
        <span id="toast-message"></span>
    </div>"##
}

/// Card component.
pub fn card(title: &str, content: &str) -> String {
    format!(
        r##"<div class="bg-white dark:bg-gray-800 rounded-xl shadow-sm border border-gray-200 dark:border-gray-700 overflow-hidden">
            <div class="px-6 py-4 border-b border-gray-200 dark:border-gray-700">
                <h3 class="text-lg font-semibold text-gray-900 dark:text-white">{title}</h3>
            </div>
            <div class="p-6">
                {content}
            </div>
        </div>"##
    )
}

/// Stats card component.
pub fn stats_card(title: &str, value: &str, icon: &str, color: &str) -> String {
    format!(
        r##"<div class="bg-white dark:bg-gray-800 rounded-xl shadow-sm border border-gray-200 dark:border-gray-700 p-6" data-stat="{title}">
            <div class="flex items-center justify-between">
                <div>
                    <p class="text-sm text-gray-500 dark:text-gray-400">{title}</p>
                    <p class="text-2xl font-bold text-gray-900 dark:text-white mt-1">{value}</p>
                </div>
                <div class="w-12 h-12 rounded-full bg-{color}-100 dark:bg-{color}-900/30 flex items-center justify-center">
                    <i class="fas fa-{icon} text-{color}-500 text-xl"></i>
                </div>
            </div>
        </div>"##
    )
}

/// Text input with a label and an optional validation message.
pub fn input(
    name: &str,
    label: &str,
    value: &str,
    placeholder: &str,
    error: Option<&str>,
) -> String {
    format!(
        r##"<div class="space-y-1">
            <label for="{name}" class="block text-sm font-medium text-gray-700 dark:text-gray-300">{label}</label>
            <input type="text" name="{name}" id="{name}" value="{value}" placeholder="{placeholder}"
                   class="w-full px-4 py-2 border {border} rounded-lg bg-white dark:bg-gray-800 text-gray-900 dark:text-white focus:ring-2 focus:ring-primary-500 focus:border-primary-500">
            {error}
        </div>"##,
        value = html_escape(value),
        border = border_class(error),
        error = field_error(error),
    )
}

/// Multi-line text input.
pub fn textarea(name: &str, label: &str, value: &str, placeholder: &str) -> String {
    format!(
        r##"<div class="space-y-1">
            <label for="{name}" class="block text-sm font-medium text-gray-700 dark:text-gray-300">{label}</label>
            <textarea name="{name}" id="{name}" rows="3" placeholder="{placeholder}"
                      class="w-full px-4 py-2 border border-gray-300 dark:border-gray-600 rounded-lg bg-white dark:bg-gray-800 text-gray-900 dark:text-white focus:ring-2 focus:ring-primary-500 focus:border-primary-500">{value}</textarea>
        </div>"##,
        value = html_escape(value),
    )
}

/// Select field component.
pub fn select(name: &str, label: &str, options: &[(String, String, bool)]) -> String {
    let options_html: String = options
        .iter()
        .map(|(value, text, selected)| {
            let (value, text) = (html_escape(value), html_escape(text));
            if *selected {
                format!(r#"<option value="{value}" selected>{text}</option>"#)
            } else {
                format!(r#"<option value="{value}">{text}</option>"#)
            }
        })
        .collect();

    format!(
        r##"<div class="space-y-1">
            <label for="{name}" class="block text-sm font-medium text-gray-700 dark:text-gray-300">{label}</label>
            <select name="{name}" id="{name}"
                    class="w-full px-4 py-2 border border-gray-300 dark:border-gray-600 rounded-lg bg-white dark:bg-gray-800 text-gray-900 dark:text-white focus:ring-2 focus:ring-primary-500 focus:border-primary-500">
                {options_html}
            </select>
        </div>"##
    )
}

fn border_class(error: Option<&str>) -> &'static str {
    if error.is_some() {
        "border-red-500"
    } else {
        "border-gray-300 dark:border-gray-600"
    }
}

fn field_error(error: Option<&str>) -> String {
    error
        .map(|e| {
            format!(
                r#"<p class="text-sm text-red-600 dark:text-red-400" data-field-error>{}</p>"#,
                html_escape(e)
            )
        })
        .unwrap_or_default()
}

/// Badge component.
pub fn badge(text: &str, color: &str) -> String {
    format!(
        r##"<span class="inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium bg-{color}-100 dark:bg-{color}-900/30 text-{color}-800 dark:text-{color}-300">{text}</span>"##,
        text = html_escape(text),
    )
}

/// Outlined badge, used for neutral labels such as file types.
pub fn outline_badge(text: &str) -> String {
    format!(
        r##"<span class="inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium border border-gray-300 dark:border-gray-600 text-gray-700 dark:text-gray-300">{}</span>"##,
        html_escape(text)
    )
}

/// Empty state component.
pub fn empty_state(
    icon: &str,
    title: &str,
    description: &str,
    action: Option<(&str, &str)>,
) -> String {
    let action_html = action.map_or(String::new(), |(text, href)| {
        format!(
            r##"<a href="{href}" class="mt-4 inline-flex items-center gap-2 bg-primary-600 hover:bg-primary-700 text-white px-4 py-2 rounded-lg font-medium transition-colors">
            <i class="fas fa-arrow-left"></i> {text}
        </a>"##
        )
    });

    format!(
        r##"<div class="text-center py-12">
            <i class="fas fa-{icon} text-4xl text-gray-400 dark:text-gray-600 mb-4"></i>
            <h3 class="text-lg font-medium text-gray-900 dark:text-white">{title}</h3>
            <p class="mt-1 text-gray-500 dark:text-gray-400">{description}</p>
            {action_html}
        </div>"##,
        description = html_escape(description),
    )
}
