use yew::prelude::*;

struct SampleOrder {
    id: &'static str,
    date: &'static str,
    status: &'static str,
    payment: &'static str,
    total: f64,
    items: &'static [(&'static str, u32, f64)],
}

// Placeholder rows until the backend exposes an order listing.
const ORDERS: [SampleOrder; 3] = [
    SampleOrder {
        id: "ORD001",
        date: "2023-07-30",
        status: "Delivered",
        payment: "Paid",
        total: 109.97,
        items: &[
            ("Research paper, Undergraduate, 8 pages", 1, 75.92),
            ("Article Critique, High School, 4 pages", 1, 34.05),
        ],
    },
    SampleOrder {
        id: "ORD002",
        date: "2023-07-29",
        status: "Processing",
        payment: "Pending",
        total: 59.97,
        items: &[("Analytical essay, Graduate, 5 pages", 1, 59.97)],
    },
    SampleOrder {
        id: "ORD003",
        date: "2023-07-28",
        status: "Shipped",
        payment: "Paid",
        total: 169.97,
        items: &[
            ("Literature review, Postgraduate, 10 pages", 1, 114.90),
            ("Editing, 11 pages", 1, 55.07),
        ],
    },
];

#[function_component(OrderHistory)]
pub fn order_history() -> Html {
    let expanded = use_state(|| None::<usize>);

    html! {
        <div class="order-history">
            <h3>{"Order history"}</h3>
            <table>
                <thead>
                    <tr>
                        <th>{"Order"}</th>
                        <th>{"Date"}</th>
                        <th>{"Status"}</th>
                        <th>{"Payment"}</th>
                        <th>{"Total"}</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {
                        for ORDERS.iter().enumerate().map(|(i, order)| {
                            let is_open = *expanded == Some(i);
                            let toggle = {
                                let expanded = expanded.clone();
                                Callback::from(move |e: MouseEvent| {
                                    e.prevent_default();
                                    expanded.set(if is_open { None } else { Some(i) });
                                })
                            };
                            html! {
                                <>
                                    <tr>
                                        <td>{order.id}</td>
                                        <td>{order.date}</td>
                                        <td>{order.status}</td>
                                        <td>{order.payment}</td>
                                        <td>{format!("${:.2}", order.total)}</td>
                                        <td>
                                            <button class="text-button" onclick={toggle}>
                                                {if is_open { "Hide" } else { "Details" }}
                                            </button>
                                        </td>
                                    </tr>
                                    {
                                        if is_open {
                                            html! {
                                                <tr class="order-detail-row">
                                                    <td colspan="6">
                                                        <ul>
                                                            {
                                                                for order.items.iter().map(|(name, qty, price)| html! {
                                                                    <li>{format!("{} (x{}) ${:.2}", name, qty, price)}</li>
                                                                })
                                                            }
                                                        </ul>
                                                    </td>
                                                </tr>
                                            }
                                        } else {
                                            html! {}
                                        }
                                    }
                                </>
                            }
                        })
                    }
                </tbody>
            </table>
        </div>
    }
}
