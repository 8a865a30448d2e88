use common::Role;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RoleSelectorProps {
    pub selected: Role,
    pub on_select: Callback<Role>,
}

/// One toggle per role. Only the selected one carries `active`.
#[function_component(RoleSelector)]
pub fn role_selector(props: &RoleSelectorProps) -> Html {
    html! {
        <div class="roles">
            { for Role::ALL.iter().map(|&role| {
                let on_click = {
                    let on_select = props.on_select.clone();
                    move |_| on_select.emit(role)
                };
                html! {
                    <button
                        type="button"
                        class={classes!("role", (role == props.selected).then_some("active"))}
                        data-role={role.as_str()}
                        onclick={on_click}
                    >
                        { role.label() }
                    </button>
                }
            })}
        </div>
    }
}
