use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::order_history::OrderHistory;
use crate::components::order_wizard::OrderWizard;
use crate::pages::home::is_logged_in;
use crate::Route;

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    html! {
        <div class="dashboard-page">
            <section class="dashboard-header">
                <h1>{"Place a new order"}</h1>
                {
                    if !is_logged_in() {
                        html! {
                            <p class="login-hint">
                                {"You can price an order without an account, but you'll need to "}
                                <Link<Route> to={Route::Login}>{"log in"}</Link<Route>>
                                {" before we start writing."}
                            </p>
                        }
                    } else {
                        html! {}
                    }
                }
            </section>
            <section class="dashboard-content">
                <OrderWizard />
                <OrderHistory />
            </section>
            <style>
                {r#"
                .dashboard-page {
                    min-height: 100vh;
                    padding: 100px 20px 60px;
                    background: #f4f6f8;
                    color: #1a1a2e;
                }
                .dashboard-header {
                    max-width: 960px;
                    margin: 0 auto 24px;
                }
                .dashboard-header h1 {
                    font-size: 2rem;
                    margin-bottom: 8px;
                }
                .login-hint a {
                    color: #ffa500;
                }
                .dashboard-content {
                    max-width: 960px;
                    margin: 0 auto;
                    background: #fff;
                    border: 1px solid #e0e0e0;
                    border-radius: 8px;
                    padding: 24px;
                }
                .stepper {
                    display: flex;
                    gap: 24px;
                    margin-bottom: 24px;
                }
                .step {
                    display: flex;
                    align-items: center;
                    gap: 8px;
                    color: #9aa0a6;
                }
                .step-number {
                    width: 28px;
                    height: 28px;
                    border-radius: 50%;
                    background: #e0e0e0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 0.9rem;
                }
                .step.active { color: #1a1a2e; font-weight: 600; }
                .step.active .step-number { background: #ffa500; color: #fff; }
                .step.done .step-number { background: #34a853; color: #fff; }
                .form-with-summary {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 32px;
                }
                .order-form {
                    display: flex;
                    flex-direction: column;
                    flex: 1;
                    max-width: 400px;
                }
                .order-form label {
                    margin: 12px 0 4px;
                    font-size: 0.9rem;
                    font-weight: 500;
                }
                .order-form input,
                .order-form select,
                .order-form textarea {
                    padding: 8px 10px;
                    border: 1px solid #ccc;
                    border-radius: 4px;
                    font-size: 0.95rem;
                }
                .deadline-inputs {
                    display: flex;
                    gap: 12px;
                }
                .deadline-inputs input { flex: 1; }
                .field-error {
                    color: #d93025;
                    font-size: 0.8rem;
                    margin-top: 4px;
                }
                .file-note {
                    font-size: 0.8rem;
                    color: #5f6368;
                    margin-top: 4px;
                }
                .primary-button {
                    margin-top: 20px;
                    padding: 10px 24px;
                    background: #ffa500;
                    color: #fff;
                    border: none;
                    border-radius: 4px;
                    font-size: 1rem;
                    cursor: pointer;
                }
                .primary-button:hover { background: #e69500; }
                .text-button {
                    background: none;
                    border: none;
                    color: #1a73e8;
                    cursor: pointer;
                    padding: 6px 12px;
                }
                .text-button:disabled { color: #9aa0a6; cursor: default; }
                .order-summary {
                    width: 300px;
                    border: 1px solid #ccc;
                    border-radius: 4px;
                    padding: 16px;
                    align-self: flex-start;
                }
                .summary-row {
                    display: flex;
                    justify-content: space-between;
                    margin: 8px 0;
                }
                .summary-row.total { font-weight: 600; margin-top: 16px; }
                .summary-row.upfront { color: #ffa500; font-weight: 600; }
                .review-grid {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 32px;
                }
                .review-column { flex: 1; min-width: 280px; }
                .review-row {
                    display: flex;
                    justify-content: space-between;
                    gap: 16px;
                    margin: 6px 0;
                }
                .review-label { color: #5f6368; }
                .wizard-controls {
                    display: flex;
                    justify-content: space-between;
                    margin-top: 24px;
                    border-top: 1px solid #eee;
                    padding-top: 12px;
                }
                .wizard-completed { text-align: center; padding: 32px 0; }
                .error-message { color: #d93025; margin: 12px 0; }
                .order-history { margin-top: 40px; }
                .order-history table {
                    width: 100%;
                    border-collapse: collapse;
                    margin-top: 12px;
                }
                .order-history th, .order-history td {
                    text-align: left;
                    padding: 8px 12px;
                    border-bottom: 1px solid #eee;
                }
                .order-detail-row td { background: #fafafa; }
                @media (max-width: 600px) {
                    .dashboard-content { padding: 12px; }
                    .form-with-summary { flex-direction: column; }
                    .order-summary { width: 100%; }
                }
                "#}
            </style>
        </div>
    }
}
