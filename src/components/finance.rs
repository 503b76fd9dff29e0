use crate::components::parallax::use_parallax;
use yew::prelude::*;

const CHART_BARS: [u32; 12] = [8, 16, 10, 20, 14, 26, 18, 24, 16, 30, 22, 26];

struct Balance {
    label: &'static str,
    amount: &'static str,
}

const BALANCES: [Balance; 3] = [
    Balance { label: "Checking", amount: "$12,420" },
    Balance { label: "Savings", amount: "$38,910" },
    Balance { label: "Investments", amount: "$128,300" },
];

struct SpendingSlice {
    label: &'static str,
    share: u32,
}

const SPENDING: [SpendingSlice; 4] = [
    SpendingSlice { label: "Bills", share: 42 },
    SpendingSlice { label: "Food", share: 24 },
    SpendingSlice { label: "Travel", share: 18 },
    SpendingSlice { label: "Other", share: 16 },
];

struct IndexReturn {
    label: &'static str,
    change: &'static str,
}

const RETURNS: [IndexReturn; 2] = [
    IndexReturn { label: "S&P 500", change: "+13.2%" },
    IndexReturn { label: "NASDAQ", change: "+18.6%" },
];

struct Payment {
    name: &'static str,
    due: &'static str,
    amount: &'static str,
}

const PAYMENTS: [Payment; 3] = [
    Payment { name: "Mortgage", due: "Apr 28", amount: "$1,950" },
    Payment { name: "Amex Platinum", due: "May 02", amount: "$620" },
    Payment { name: "Car Lease", due: "May 10", amount: "$410" },
];

#[function_component(MiniChart)]
pub fn mini_chart() -> Html {
    html! {
        <div class="mini-chart">
            {
                CHART_BARS.iter().map(|height| html! {
                    <div class="mini-chart-bar" style={format!("height: {}px;", height * 3)}></div>
                }).collect::<Html>()
            }
        </div>
    }
}

#[function_component(FinanceSections)]
pub fn finance_sections() -> Html {
    let slow_column = use_node_ref();
    let fast_column = use_node_ref();

    use_parallax(slow_column.clone(), 0.06);
    use_parallax(fast_column.clone(), 0.12);

    let finance_css = r#"
        .finance-section {
            position: relative;
            z-index: 10;
            margin: 0 auto;
            max-width: 72rem;
            padding: 6rem 1.5rem;
        }
        .finance-grid {
            display: grid;
            grid-template-columns: 1fr;
            align-items: start;
            gap: 2rem;
        }
        .finance-column {
            display: flex;
            flex-direction: column;
            gap: 1.5rem;
        }
        .finance-card {
            border: 1px solid rgba(255, 255, 255, 0.1);
            border-radius: 1rem;
            background: rgba(255, 255, 255, 0.05);
            padding: 1.5rem;
        }
        .finance-card h3 {
            margin: 0;
            font-size: 1.125rem;
            font-weight: 600;
            color: white;
        }
        .finance-card .card-subtitle {
            margin: 0.25rem 0 0;
            font-size: 0.875rem;
            color: rgba(219, 234, 254, 0.8);
        }
        .card-header {
            display: flex;
            align-items: center;
            justify-content: space-between;
        }
        .trend-badge {
            border-radius: 0.375rem;
            background: rgba(52, 211, 153, 0.15);
            padding: 0.25rem 0.5rem;
            font-size: 0.75rem;
            color: #6ee7b7;
        }
        .balance-grid {
            margin-top: 1.5rem;
            display: grid;
            grid-template-columns: repeat(3, 1fr);
            gap: 1rem;
        }
        .balance-grid .balance-label {
            margin: 0;
            font-size: 0.75rem;
            color: rgba(191, 219, 254, 0.7);
        }
        .balance-grid .balance-amount {
            margin: 0.25rem 0 0;
            font-size: 1.25rem;
            font-weight: 500;
            color: white;
        }
        .mini-chart {
            margin-top: 1.5rem;
            height: 6rem;
            width: 100%;
            border: 1px solid rgba(255, 255, 255, 0.1);
            border-radius: 0.5rem;
            background: rgba(255, 255, 255, 0.05);
            padding: 0.5rem;
            display: flex;
            align-items: flex-end;
            gap: 0.25rem;
            box-sizing: border-box;
        }
        .mini-chart-bar {
            flex: 1;
            border-radius: 0.125rem;
            background: linear-gradient(to top,
                rgba(37, 99, 235, 0.6),
                rgba(34, 211, 238, 0.6));
        }
        .spending-grid {
            margin-top: 1.5rem;
            display: grid;
            grid-template-columns: repeat(4, 1fr);
            gap: 0.75rem;
            text-align: center;
        }
        .spending-ring {
            margin: 0 auto;
            height: 5rem;
            width: 5rem;
            border-radius: 50%;
            background: linear-gradient(135deg,
                rgba(59, 130, 246, 0.3),
                rgba(34, 211, 238, 0.3));
            padding: 0.25rem;
            box-sizing: border-box;
        }
        .spending-ring-inner {
            display: flex;
            height: 100%;
            width: 100%;
            align-items: center;
            justify-content: center;
            border: 1px solid rgba(255, 255, 255, 0.1);
            border-radius: 50%;
            background: rgba(15, 23, 42, 0.4);
            color: white;
            box-sizing: border-box;
        }
        .spending-label {
            margin: 0.5rem 0 0;
            font-size: 0.75rem;
            color: rgba(191, 219, 254, 0.8);
        }
        .returns-grid {
            margin-top: 1.5rem;
            display: grid;
            grid-template-columns: repeat(2, 1fr);
            gap: 1rem;
            font-size: 0.875rem;
        }
        .returns-tile {
            border: 1px solid rgba(255, 255, 255, 0.1);
            border-radius: 0.5rem;
            background: rgba(15, 23, 42, 0.4);
            padding: 0.75rem;
        }
        .returns-tile .index-label {
            margin: 0;
            color: rgba(191, 219, 254, 0.7);
        }
        .returns-tile .index-change {
            margin: 0.25rem 0 0;
            color: white;
        }
        .payment-list {
            margin: 1rem 0 0;
            padding: 0;
            list-style: none;
            display: flex;
            flex-direction: column;
            gap: 0.75rem;
        }
        .payment-row {
            display: flex;
            align-items: center;
            justify-content: space-between;
            border: 1px solid rgba(255, 255, 255, 0.1);
            border-radius: 0.5rem;
            background: rgba(15, 23, 42, 0.4);
            padding: 0.75rem;
        }
        .payment-row .payment-name {
            margin: 0;
            font-weight: 500;
            color: white;
        }
        .payment-row .payment-due {
            margin: 0;
            font-size: 0.75rem;
            color: rgba(191, 219, 254, 0.7);
        }
        .payment-row .payment-amount {
            color: white;
        }
        @media (min-width: 768px) {
            .finance-section {
                padding: 6rem 2.5rem;
            }
            .finance-grid {
                grid-template-columns: repeat(2, 1fr);
            }
        }
    "#;

    html! {
        <section class="finance-section">
            <style>{finance_css}</style>
            <div class="finance-grid">
                <div class="finance-column" ref={slow_column}>
                    <div class="finance-card">
                        <div class="card-header">
                            <div>
                                <h3>{"Account Overview"}</h3>
                                <p class="card-subtitle">{"Balances across linked accounts"}</p>
                            </div>
                            <span class="trend-badge">{"+2.4% Today"}</span>
                        </div>
                        <div class="balance-grid">
                            {
                                BALANCES.iter().map(|balance| html! {
                                    <div>
                                        <p class="balance-label">{balance.label}</p>
                                        <p class="balance-amount">{balance.amount}</p>
                                    </div>
                                }).collect::<Html>()
                            }
                        </div>
                        <MiniChart />
                    </div>

                    <div class="finance-card">
                        <h3>{"Spending Breakdown"}</h3>
                        <p class="card-subtitle">{"Month to date"}</p>
                        <div class="spending-grid">
                            {
                                SPENDING.iter().map(|slice| html! {
                                    <div>
                                        <div class="spending-ring">
                                            <div class="spending-ring-inner">
                                                {format!("{}%", slice.share)}
                                            </div>
                                        </div>
                                        <p class="spending-label">{slice.label}</p>
                                    </div>
                                }).collect::<Html>()
                            }
                        </div>
                    </div>
                </div>

                <div class="finance-column" ref={fast_column}>
                    <div class="finance-card">
                        <h3>{"Portfolio Performance"}</h3>
                        <p class="card-subtitle">{"YTD Returns"}</p>
                        <MiniChart />
                        <div class="returns-grid">
                            {
                                RETURNS.iter().map(|index| html! {
                                    <div class="returns-tile">
                                        <p class="index-label">{index.label}</p>
                                        <p class="index-change">{index.change}</p>
                                    </div>
                                }).collect::<Html>()
                            }
                        </div>
                    </div>

                    <div class="finance-card">
                        <h3>{"Upcoming Payments"}</h3>
                        <ul class="payment-list">
                            {
                                PAYMENTS.iter().map(|payment| html! {
                                    <li class="payment-row">
                                        <div>
                                            <p class="payment-name">{payment.name}</p>
                                            <p class="payment-due">{format!("Due {}", payment.due)}</p>
                                        </div>
                                        <span class="payment-amount">{payment.amount}</span>
                                    </li>
                                }).collect::<Html>()
                            }
                        </ul>
                    </div>
                </div>
            </div>
        </section>
    }
}
