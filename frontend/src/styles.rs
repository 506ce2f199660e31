//! Stylesheet injected by the editor view.

pub const EDITOR_CSS: &str = r#"
.announcement-editor { font-family: 'Inter', Arial, sans-serif; color: #0f172a; }
.form-panel, .preview-panel { background: #fff; border-radius: 12px; box-shadow: 0 1px 3px rgba(15, 23, 42, 0.12); display: flex; flex-direction: column; min-height: 0; }
.form-panel { overflow-y: auto; padding: 20px; }
.panel-header { display: flex; justify-content: space-between; align-items: center; gap: 12px; padding-bottom: 12px; border-bottom: 1px solid #e2e8f0; }
.panel-header h2 { margin: 0; font-size: 18px; }
.panel-subtitle { margin: 4px 0 0; color: #64748b; font-size: 13px; }
.panel-stats { display: flex; gap: 12px; font-size: 13px; font-weight: 600; }
.form-section { border-bottom: 1px solid #e2e8f0; }
.section-header { display: flex; align-items: center; gap: 8px; width: 100%; padding: 14px 0; background: none; border: none; cursor: pointer; font-size: 15px; font-weight: 600; }
.section-header .chevron { margin-left: auto; }
.section-content { padding-bottom: 16px; display: flex; flex-direction: column; gap: 14px; }
.form-section:not(.open) > .section-content { display: none; }
.field { display: flex; flex-direction: column; gap: 6px; }
.field label { font-size: 13px; font-weight: 600; color: #334155; }
.field input, .field select, .field textarea { padding: 8px 10px; border: 1px solid #cbd5e1; border-radius: 6px; font: inherit; }
.alert-indisponibilidade { border-color: #ef4444 !important; }
.alert-instabilidade { border-color: #f59e0b !important; }
.alert-degradacao { border-color: #f97316 !important; }
.success-normalizacao { border-color: #10b981 !important; }
.toggle { display: flex; align-items: center; gap: 8px; font-size: 14px; }
.char-counter { align-self: flex-end; font-size: 12px; }
.input-with-action { display: flex; gap: 6px; }
.input-with-action input { flex: 1; }
.btn-case { min-width: 44px; border: 1px solid #cbd5e1; border-radius: 6px; background: #f8fafc; cursor: pointer; }
.editor-toolbar { display: flex; align-items: center; gap: 2px; }
.toolbar-separator { width: 1px; height: 20px; margin: 0 6px; background: #cbd5e1; }
.icon-button { display: inline-flex; align-items: center; justify-content: center; padding: 4px; border: none; border-radius: 4px; background: none; cursor: pointer; }
.icon-button:hover, .icon-button.active { background: #e0e7ff; color: #4338ca; }
.rich-editor { min-height: 140px; padding: 10px; border: 1px solid #cbd5e1; border-radius: 6px; outline: none; }
.rich-editor:focus { border-color: #6366f1; }
.body-stats { display: flex; gap: 12px; font-size: 12px; color: #64748b; }
.position-cards { display: grid; grid-template-columns: 1fr; gap: 10px; }
.position-card { padding: 10px; border: 1px solid #e2e8f0; border-radius: 8px; background: #f8fafc; }
.position-card-header { display: flex; justify-content: space-between; align-items: center; font-weight: 600; font-size: 13px; }
.layout-controls { display: grid; grid-template-columns: repeat(3, 1fr); gap: 8px; }
.layout-control label { font-size: 12px; color: #64748b; }
.stepper { display: flex; }
.stepper input { width: 100%; min-width: 0; text-align: center; border: 1px solid #cbd5e1; }
.stepper button { width: 26px; border: 1px solid #cbd5e1; background: #fff; cursor: pointer; }
.preset-buttons { display: grid; grid-template-columns: repeat(4, 1fr); gap: 6px; }
.btn-preset, .btn-secondary, .btn-primary, .btn-reset { display: inline-flex; align-items: center; justify-content: center; gap: 6px; padding: 8px 12px; border-radius: 6px; cursor: pointer; font: inherit; }
.btn-preset, .btn-secondary, .btn-reset { border: 1px solid #cbd5e1; background: #fff; }
.btn-primary { border: none; background: #6366f1; color: #fff; }
.btn-primary.copied { background: #10b981; }
.form-actions { display: flex; flex-wrap: wrap; gap: 8px; padding-top: 16px; }
.preview-panel { padding: 16px; }
.zoom-controls { display: flex; align-items: center; gap: 4px; }
.zoom-level { min-width: 48px; text-align: center; font-size: 13px; }
.preview-error { margin: 8px 0; padding: 10px; border-radius: 6px; background: #fef2f2; color: #b91c1c; }
.preview-container { flex: 1; overflow: auto; margin-top: 12px; background: #e2e8f0; border-radius: 8px; }
.preview-wrapper { width: 1000px; height: 1300px; transition: transform 0.2s ease; }
.preview-content { width: 1000px; height: 1300px; position: relative; background: #fff; }
.saving-indicator { position: fixed; top: 20px; right: 20px; z-index: 10000; display: flex; align-items: center; gap: 8px; padding: 10px 16px; border-radius: 8px; color: #fff; background: #6366f1; }
.saving-indicator.success { background: #10b981; }
.saving-indicator.error { background: #ef4444; }
.spinner { width: 14px; height: 14px; border: 2px solid rgba(255, 255, 255, 0.4); border-top-color: #fff; border-radius: 50%; animation: spin 0.8s linear infinite; }
@keyframes spin { to { transform: rotate(360deg); } }
.top-sheet { position: fixed; top: 0; left: 50%; z-index: 9000; width: min(560px, 92vw); transform: translate(-50%, -110%); transition: transform 0.25s ease; background: #fff; border-radius: 0 0 12px 12px; box-shadow: 0 8px 24px rgba(15, 23, 42, 0.25); }
.top-sheet.show { transform: translate(-50%, 0); }
.accessibility-dialog { padding: 20px; }
.dialog-header { display: flex; align-items: center; gap: 8px; }
.dialog-header h3 { margin: 0; flex: 1; }
.accessibility-preview { margin: 16px 0; padding: 12px; border: 1px solid #e2e8f0; border-radius: 8px; max-height: 50vh; overflow: auto; }
.dialog-actions { display: flex; justify-content: flex-end; gap: 8px; }
"#;
