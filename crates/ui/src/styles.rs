//! CSS styles for the UI

/// Complete offline CSS styles
pub const CUSTOM_STYLES: &str = r#"
    /* Reset & Base */
    * {
        margin: 0;
        padding: 0;
        box-sizing: border-box;
    }

    html, body {
        font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
        background: linear-gradient(135deg, #10172a 0%, #1e1b3a 100%);
        color: #e5e7eb;
        height: 100%;
        overflow: hidden;
    }

    /* Scrollbar */
    ::-webkit-scrollbar {
        width: 6px;
        height: 6px;
    }
    ::-webkit-scrollbar-track {
        background: transparent;
    }
    ::-webkit-scrollbar-thumb {
        background: rgba(167, 139, 250, 0.35);
        border-radius: 3px;
    }
    ::-webkit-scrollbar-thumb:hover {
        background: rgba(167, 139, 250, 0.55);
    }

    /* Main Container */
    .main-container {
        height: 100vh;
        display: flex;
        flex-direction: column;
        outline: none;
    }

    /* Title Bar */
    .title-bar {
        display: flex;
        justify-content: space-between;
        align-items: center;
        height: 36px;
        background: linear-gradient(to right, #0b1020, #171233);
        border-bottom: 1px solid rgba(167, 139, 250, 0.25);
        user-select: none;
        flex-shrink: 0;
    }
    .title-bar-drag {
        flex: 1;
        height: 100%;
        display: flex;
        align-items: center;
        padding-left: 12px;
        cursor: move;
    }
    .title-text {
        font-size: 14px;
        font-weight: 500;
        color: #a78bfa;
    }
    .title-bar-buttons {
        display: flex;
        height: 100%;
    }
    .title-btn {
        width: 48px;
        height: 100%;
        border: none;
        background: transparent;
        color: #9ca3af;
        font-size: 12px;
        cursor: pointer;
        transition: all 0.15s;
    }
    .title-btn:hover {
        background: rgba(167, 139, 250, 0.15);
        color: #e5e7eb;
    }
    .title-btn-close:hover {
        background: #dc2626;
        color: #fff;
    }

    /* Tabs */
    .tab-bar {
        display: flex;
        gap: 4px;
        padding: 8px 12px 0 12px;
        background: rgba(11, 16, 32, 0.6);
        flex-shrink: 0;
    }
    .tab-item {
        padding: 8px 18px;
        font-size: 13px;
        color: #9ca3af;
        text-decoration: none;
        border-radius: 8px 8px 0 0;
        border: 1px solid transparent;
        border-bottom: none;
    }
    .tab-item:hover {
        color: #e5e7eb;
        background: rgba(167, 139, 250, 0.08);
    }
    .tab-active {
        color: #a78bfa;
        background: rgba(167, 139, 250, 0.12);
        border-color: rgba(167, 139, 250, 0.3);
    }

    /* Content */
    .content-area {
        flex: 1;
        overflow-y: auto;
        padding: 14px;
    }
    .tab-page {
        display: flex;
        flex-direction: column;
        gap: 12px;
    }

    .header-box {
        padding: 14px 16px;
        background: rgba(23, 18, 51, 0.7);
        border: 1px solid rgba(167, 139, 250, 0.2);
        border-radius: 10px;
    }
    .header-title {
        font-size: 20px;
        color: #ede9fe;
        margin-bottom: 6px;
    }
    .header-stats {
        display: flex;
        gap: 18px;
        font-size: 12px;
        color: #9ca3af;
    }

    /* Controls */
    .controls {
        display: flex;
        gap: 10px;
        align-items: center;
    }
    .search-input {
        flex: 1;
        padding: 9px 12px;
        background: rgba(17, 24, 39, 0.8);
        border: 1px solid rgba(167, 139, 250, 0.25);
        border-radius: 8px;
        color: #e5e7eb;
        font-size: 13px;
        outline: none;
    }
    .search-input:focus {
        border-color: #a78bfa;
    }
    .search-input-wide {
        flex: 3;
    }
    .count-input {
        width: 72px;
        padding: 9px 10px;
        background: rgba(17, 24, 39, 0.8);
        border: 1px solid rgba(167, 139, 250, 0.25);
        border-radius: 8px;
        color: #e5e7eb;
        font-size: 13px;
        outline: none;
    }

    .btn {
        padding: 9px 16px;
        border: none;
        border-radius: 8px;
        font-size: 13px;
        cursor: pointer;
        transition: all 0.15s;
        white-space: nowrap;
    }
    .btn:disabled {
        opacity: 0.5;
        cursor: default;
    }
    .btn-primary {
        background: linear-gradient(135deg, #7c3aed, #a78bfa);
        color: #fff;
    }
    .btn-primary:hover:enabled {
        filter: brightness(1.15);
    }
    .btn-small {
        padding: 5px 10px;
        font-size: 12px;
        background: rgba(167, 139, 250, 0.15);
        color: #c4b5fd;
    }
    .btn-small:hover {
        background: rgba(167, 139, 250, 0.3);
    }

    /* Lead cards */
    .card-list {
        display: flex;
        flex-direction: column;
        gap: 12px;
    }
    .empty-hint {
        padding: 30px;
        text-align: center;
        color: #6b7280;
        font-size: 13px;
    }
    .lead-card {
        padding: 14px 16px;
        background: rgba(23, 18, 51, 0.7);
        border: 1px solid rgba(167, 139, 250, 0.2);
        border-radius: 10px;
        display: flex;
        flex-direction: column;
        gap: 10px;
    }
    .lead-card-header {
        display: flex;
        justify-content: space-between;
        align-items: center;
    }
    .lead-card-names {
        display: flex;
        flex-direction: column;
        gap: 2px;
    }
    .lead-name {
        font-size: 15px;
        font-weight: 600;
        color: #ede9fe;
    }
    .lead-domain {
        font-size: 12px;
        color: #818cf8;
    }
    .score-badge {
        min-width: 44px;
        text-align: center;
        padding: 6px 10px;
        border-radius: 8px;
        font-size: 16px;
        font-weight: 700;
    }
    .score-success {
        background: rgba(34, 197, 94, 0.18);
        color: #4ade80;
    }
    .score-warning {
        background: rgba(234, 179, 8, 0.18);
        color: #facc15;
    }
    .score-danger {
        background: rgba(239, 68, 68, 0.18);
        color: #f87171;
    }
    .lead-reasons {
        list-style: none;
        display: flex;
        flex-wrap: wrap;
        gap: 6px 14px;
        font-size: 12px;
        color: #9ca3af;
    }
    .lead-reasons li::before {
        content: '• ';
        color: #a78bfa;
    }
    .lead-email {
        padding: 10px 12px;
        background: rgba(11, 16, 32, 0.8);
        border-radius: 8px;
        font-family: 'Cascadia Code', Consolas, monospace;
        font-size: 12px;
        color: #d1d5db;
        white-space: pre-wrap;
        max-height: 220px;
        overflow-y: auto;
    }

    /* Report */
    .report-panel {
        display: flex;
        flex-direction: column;
        gap: 12px;
    }
    .report-warning {
        padding: 10px 14px;
        background: rgba(239, 68, 68, 0.12);
        border: 1px solid rgba(239, 68, 68, 0.35);
        border-radius: 8px;
        font-size: 13px;
        color: #fca5a5;
    }
    .score-row {
        display: flex;
        gap: 12px;
    }
    .score-box {
        flex: 1;
        padding: 14px;
        background: rgba(23, 18, 51, 0.7);
        border: 1px solid rgba(167, 139, 250, 0.2);
        border-radius: 10px;
        display: flex;
        flex-direction: column;
        align-items: center;
        gap: 6px;
    }
    .score-box-label {
        font-size: 12px;
        color: #9ca3af;
        text-transform: uppercase;
        letter-spacing: 0.08em;
    }
    .score-box-value {
        font-size: 26px;
        font-weight: 700;
    }
    .score-good { color: #4ade80; }
    .score-mid { color: #facc15; }
    .score-bad { color: #f87171; }

    .metric-grid {
        display: grid;
        grid-template-columns: repeat(4, 1fr);
        gap: 12px;
    }
    .metric-item {
        padding: 10px 14px;
        background: rgba(23, 18, 51, 0.7);
        border: 1px solid rgba(167, 139, 250, 0.2);
        border-radius: 10px;
        display: flex;
        flex-direction: column;
        gap: 4px;
    }
    .metric-label {
        font-size: 11px;
        color: #9ca3af;
        text-transform: uppercase;
        letter-spacing: 0.08em;
    }
    .metric-value {
        font-size: 15px;
        color: #ede9fe;
    }

    .seo-details {
        padding: 12px 14px;
        background: rgba(23, 18, 51, 0.7);
        border: 1px solid rgba(167, 139, 250, 0.2);
        border-radius: 10px;
        display: flex;
        flex-direction: column;
        gap: 8px;
    }
    .seo-line {
        display: flex;
        flex-direction: column;
        gap: 2px;
    }
    .seo-value {
        font-size: 13px;
        color: #d1d5db;
    }

    .suggestions {
        padding: 12px 14px;
        background: rgba(23, 18, 51, 0.7);
        border: 1px solid rgba(250, 204, 21, 0.25);
        border-radius: 10px;
    }
    .suggestions-header {
        display: flex;
        justify-content: space-between;
        align-items: center;
        font-size: 13px;
        font-weight: 600;
        color: #facc15;
        margin-bottom: 8px;
    }
    .suggestion-list {
        list-style: none;
        display: flex;
        flex-direction: column;
        gap: 5px;
        font-size: 12px;
        color: #d1d5db;
    }
    .suggestion-list li::before {
        content: '→ ';
        color: #facc15;
    }

    /* Toasts */
    .toast-stack {
        position: fixed;
        right: 20px;
        bottom: 20px;
        display: flex;
        flex-direction: column;
        gap: 8px;
        z-index: 1000;
    }
    .toast {
        padding: 11px 18px;
        border-radius: 8px;
        font-size: 13px;
        box-shadow: 0 8px 24px rgba(0, 0, 0, 0.45);
        animation: toast-in 0.15s ease-out;
    }
    .toast-success {
        background: rgba(22, 60, 38, 0.95);
        border: 1px solid rgba(74, 222, 128, 0.4);
        color: #bbf7d0;
    }
    .toast-error {
        background: rgba(69, 17, 27, 0.95);
        border: 1px solid rgba(248, 113, 113, 0.4);
        color: #fecaca;
    }
    @keyframes toast-in {
        from {
            opacity: 0;
            transform: translateY(8px);
        }
        to {
            opacity: 1;
            transform: translateY(0);
        }
    }

    /* About modal */
    .about-modal-overlay {
        position: fixed;
        inset: 0;
        background: rgba(0, 0, 0, 0.55);
        display: flex;
        align-items: center;
        justify-content: center;
        z-index: 2000;
    }
    .about-modal {
        width: 440px;
        background: #171233;
        border: 1px solid rgba(167, 139, 250, 0.3);
        border-radius: 12px;
        display: flex;
        flex-direction: column;
        overflow: hidden;
    }
    .about-modal-header {
        display: flex;
        justify-content: space-between;
        align-items: center;
        padding: 12px 16px;
        border-bottom: 1px solid rgba(167, 139, 250, 0.2);
    }
    .about-modal-title {
        font-size: 15px;
        color: #ede9fe;
    }
    .about-modal-close {
        border: none;
        background: transparent;
        color: #9ca3af;
        font-size: 14px;
        cursor: pointer;
    }
    .about-modal-close:hover {
        color: #f87171;
    }
    .about-modal-body {
        white-space: pre-line;
        padding: 10px 16px 16px 16px;
        font-size: 13px;
        color: #d1d5db;
    }
"#;
